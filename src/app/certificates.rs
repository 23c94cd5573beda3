use std::sync::Arc;

use leptos::{ev::KeyboardEvent, prelude::*, reactive::owner::LocalStorage};

use crate::{
    portfolio::Certificate,
    viewer::{ModalController, ModalHost, PointerTarget},
};

type Viewer = RwSignal<ModalController<DocumentHost>, LocalStorage>;

/// The browser document: scroll locking goes through the `<body>` inline
/// style, key presses come from a window `keydown` listener.
#[derive(Clone)]
pub struct DocumentHost {
    on_key: Arc<dyn Fn(String) + Send + Sync>,
}

impl DocumentHost {
    pub fn new(on_key: impl Fn(String) + Send + Sync + 'static) -> Self {
        Self {
            on_key: Arc::new(on_key),
        }
    }
}

pub struct KeyListener(Option<WindowListenerHandle>);

impl Drop for KeyListener {
    fn drop(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.remove();
        }
    }
}

impl ModalHost for DocumentHost {
    type Subscription = KeyListener;

    fn lock_scroll(&self) {
        set_body_overflow(Some("hidden"));
    }

    fn unlock_scroll(&self) {
        set_body_overflow(None);
    }

    fn listen_for_cancel(&self) -> KeyListener {
        let on_key = Arc::clone(&self.on_key);
        let handle = window_event_listener(leptos::ev::keydown, move |ev| on_key(ev.key()));
        KeyListener(Some(handle))
    }
}

fn set_body_overflow(value: Option<&str>) {
    let Some(body) = document().body() else {
        log::warn!("no document body to update scrolling on");
        return;
    };
    let style = body.style();
    let res = match value {
        Some(value) => style.set_property("overflow", value),
        None => style.remove_property("overflow").map(drop),
    };
    if let Err(err) = res {
        log::warn!("couldn't update body overflow: {err:?}");
    }
}

#[component]
pub fn Certificates(certificates: Vec<Certificate>) -> impl IntoView {
    let key_press = RwSignal::new(None::<String>);
    let viewer: Viewer = RwSignal::new_local(ModalController::new(DocumentHost::new(
        move |key| key_press.set(Some(key)),
    )));

    Effect::watch(
        move || key_press.get(),
        move |key, _, _| {
            if let Some(key) = key {
                viewer.update(|v| {
                    v.handle_key(key);
                });
            }
        },
        false,
    );
    on_cleanup(move || {
        viewer.try_update(|v| {
            v.close();
        });
    });

    view! {
        <section class="mb-24">
            <h2 class="glow-text text-5xl md:text-7xl xl:text-8xl font-bold text-center mb-10 lg:mb-20">
                "My Certificates"
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-[repeat(auto-fit,minmax(300px,1fr))] gap-10 place-items-center">
                {certificates
                    .into_iter()
                    .map(|certificate| view! { <CertificateCard certificate viewer /> })
                    .collect_view()}
            </div>
            <ImageViewer viewer />
        </section>
    }
}

#[component]
fn CertificateCard(certificate: Certificate, viewer: Viewer) -> impl IntoView {
    let Certificate { title, image } = certificate;
    let open = {
        let image = image.clone();
        move || {
            viewer.update(|v| {
                v.open(image.clone());
            });
        }
    };
    let open_on_click = open.clone();

    view! {
        <div
            class="glass-card w-full max-w-md p-5 cursor-pointer transition-transform hover:scale-105"
            role="button"
            tabindex="0"
            on:click=move |_| open_on_click()
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Enter" {
                    open();
                }
            }
        >
            <img class="w-full h-64 object-cover rounded-xl" src=image.src alt=image.alt />
            <h3 class="glow-text text-xl font-bold text-center mt-4">{title}</h3>
            <p class="text-sm font-bold text-center text-white/70">"Click to view fullscreen"</p>
        </div>
    }
}

#[component]
fn ImageViewer(viewer: Viewer) -> impl IntoView {
    move || {
        viewer
            .with(|v| v.selected().cloned())
            .map(|image| {
                let download = image.download_name();
                view! {
                    <div
                        class="viewer-backdrop fixed inset-0 z-50 grid place-items-center p-6 bg-black/80 backdrop-blur"
                        role="dialog"
                        aria-modal="true"
                        on:click=move |_| {
                            viewer.update(|v| {
                                v.handle_pointer(PointerTarget::Backdrop);
                            });
                        }
                    >
                        <div
                            class="viewer-frame relative max-w-5xl w-full rounded-3xl p-4 bg-black/60 border border-white/20"
                            on:click=|ev| ev.stop_propagation()
                        >
                            <button
                                class="absolute top-3 right-3 z-10 rounded-xl px-3 py-1 text-lg font-black bg-white/10 hover:bg-white/20"
                                aria-label="Close"
                                on:click=move |_| {
                                    viewer.update(|v| {
                                        v.close();
                                    });
                                }
                            >
                                "✕"
                            </button>
                            <img
                                class="w-full max-h-[80vh] object-contain rounded-2xl"
                                src=image.src.clone()
                                alt=image.alt
                            />
                            <div class="flex justify-between items-center mt-3 gap-4">
                                <div class="text-sm font-extrabold text-white/70">
                                    "ESC or click outside to close"
                                </div>
                                <a
                                    class="rounded-xl px-4 py-2 text-sm font-black bg-accent/80 hover:bg-accent"
                                    href=image.src
                                    download=download
                                >
                                    "Download"
                                </a>
                            </div>
                        </div>
                    </div>
                }
            })
    }
}
