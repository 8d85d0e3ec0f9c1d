// Static copy for the clinic pages.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static [&'static str],
    pub open_at_load: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub detail: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const CLINIC_NAME: &str = "Northside Physical Therapy";
pub const CLINIC_PHONE: &str = "(555) 014-2290";
pub const CLINIC_ADDRESS: &str = "412 Alder Street, Suite 3";
pub const HERO_VIDEO_SRC: &str = "/assets/hero-loop.mp4";
pub const HERO_POSTER_SRC: &str = "/assets/hero-poster.jpg";

pub const SERVICES: &[Service] = &[
    Service {
        title: "Sports Rehabilitation",
        summary: "Return-to-play programs built around your sport, your season and your schedule.",
    },
    Service {
        title: "Post-Surgical Recovery",
        summary: "Progressive plans that follow your surgeon's protocol from the first week onward.",
    },
    Service {
        title: "Back & Neck Pain",
        summary: "Manual therapy and targeted exercise for chronic and acute spinal pain.",
    },
    Service {
        title: "Balance & Fall Prevention",
        summary: "Strength and vestibular work to keep you steady on your feet.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Six weeks after my ACL surgery I was walking without a brace. The team kept me honest about my home exercises.",
        author: "Maria L.",
        detail: "Post-surgical recovery",
    },
    Testimonial {
        quote: "I had lived with lower back pain for years. I finally understand what makes it worse and what makes it better.",
        author: "James T.",
        detail: "Back pain",
    },
    Testimonial {
        quote: "They got me ready for my first marathon after a stress fracture. Flexible appointment times made it possible.",
        author: "Priya K.",
        detail: "Sports rehabilitation",
    },
    Testimonial {
        quote: "My mother's balance has improved so much that she is gardening again.",
        author: "Daniel R.",
        detail: "Balance & fall prevention",
    },
    Testimonial {
        quote: "Friendly front desk, no waiting, and a therapist who actually listens.",
        author: "Helen W.",
        detail: "Neck pain",
    },
];

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Do I need a referral from my doctor?",
        answer: &[
            "Most patients can book directly without a referral. Some insurance plans still require one for coverage, so check with your provider or give us a call and we will help you find out.",
        ],
        open_at_load: true,
    },
    FaqEntry {
        question: "What should I bring to my first appointment?",
        answer: &[
            "Bring a photo ID, your insurance card, any imaging reports and a list of current medications.",
            "Wear comfortable clothing that lets us see and move the area we are treating.",
        ],
        open_at_load: false,
    },
    FaqEntry {
        question: "How long is each session?",
        answer: &[
            "The first visit is a 60 minute evaluation. Follow-up sessions usually run 45 minutes.",
        ],
        open_at_load: false,
    },
    FaqEntry {
        question: "Which insurance plans do you accept?",
        answer: &[
            "We are in network with most major plans and also offer self-pay packages. Call the front desk with your member ID and we will confirm your benefits before your first visit.",
        ],
        open_at_load: false,
    },
    FaqEntry {
        question: "How many visits will I need?",
        answer: &[
            "It depends on your condition and goals. After your evaluation your therapist will outline a plan with an expected number of visits and review it with you as you progress.",
        ],
        open_at_load: false,
    },
    FaqEntry {
        question: "What is your cancellation policy?",
        answer: &[
            "Please let us know at least 24 hours in advance so we can offer the time to another patient.",
        ],
        open_at_load: false,
    },
];

/// How many questions the home page previews before linking to the full list.
pub const FAQ_PREVIEW_COUNT: usize = 3;
