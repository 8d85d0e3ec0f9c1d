use log::warn;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Event, HtmlVideoElement, MouseEvent};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Playing,
    Paused,
}

impl Playback {
    pub fn from_paused(paused: bool) -> Self {
        if paused {
            Playback::Paused
        } else {
            Playback::Playing
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Playback::Playing => "Pause video",
            Playback::Paused => "Play video",
        }
    }

    pub fn button_icon(self) -> &'static str {
        match self {
            Playback::Playing => "❚❚",
            Playback::Paused => "►",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroVideoProps {
    pub src: AttrValue,
    pub poster: AttrValue,
}

#[function_component(HeroVideo)]
pub fn hero_video(props: &HeroVideoProps) -> Html {
    let video_ref = use_node_ref();
    // Starts paused; the element's own play/pause events drive this, so a
    // blocked autoplay never leaves the button out of sync.
    let playback = use_state(|| Playback::Paused);

    let sync_playback = {
        let video_ref = video_ref.clone();
        let playback = playback.clone();
        Callback::from(move |_: Event| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                playback.set(Playback::from_paused(video.paused()));
            }
        })
    };

    let toggle = {
        let video_ref = video_ref.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let Some(video) = video_ref.cast::<HtmlVideoElement>() else {
                return;
            };
            if !video.paused() {
                let _ = video.pause();
                return;
            }
            match video.play() {
                Ok(promise) => spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        warn!("Hero video refused to play: {:?}", e);
                    }
                }),
                Err(e) => warn!("Hero video play() threw: {:?}", e),
            }
        })
    };

    html! {
        <div class="hero-video">
            <video
                ref={video_ref}
                src={props.src.clone()}
                poster={props.poster.clone()}
                autoplay=true
                muted=true
                loop=true
                playsinline=true
                onplay={sync_playback.clone()}
                onpause={sync_playback}
            />
            <button
                class="hero-video-toggle"
                type="button"
                aria-label={playback.button_label()}
                onclick={toggle}
            >
                {playback.button_icon()}
            </button>
            <style>
                {r#"
                .hero-video video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    z-index: -1;
                }

                .hero-video-toggle {
                    position: absolute;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    width: 2.75rem;
                    height: 2.75rem;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.6);
                    background: rgba(15, 23, 42, 0.5);
                    color: #ffffff;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
