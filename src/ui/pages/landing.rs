//! Landing page component
//!
//! A single scrolling showcase page:
//! - Navbar that firms up once the page scrolls
//! - Hero with floating orbs over a breathing grid
//! - Two interactive marquees
//! - Feature cards with 3D tilt
//! - Progress ring and bars that fill on entry
//! - Masonry gallery with a lightbox
//! - Footer with the keyboard shortcut legend
//!
//! Markup only; every effect is attached by [`MagicEffects`] after hydration.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::common::{KeyboardHint, KeyboardHints};
use crate::ui::effects::MagicEffects;

const MARQUEE_TOP: [&str; 6] = ["Rust", "WebAssembly", "Leptos", "Axum", "Tokio", "Serde"];
const MARQUEE_BOTTOM: [&str; 6] = ["Ripples", "Parallax", "Tilt", "Trails", "Marquees", "Reveals"];

/// Landing page with all page effects
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text="Magic UI - Interactive Effects Showcase" />
        <Meta name="description" content="A showcase of scroll reveals, cursor trails, magnetic buttons and other interactive effects written in Rust." />

        <PageStyles />
        <MagicEffects />

        <div class="min-h-screen bg-black text-white overflow-x-hidden">
            <Navbar />
            <HeroSection />
            <MarqueeSection />
            <FeaturesSection />
            <ProgressSection />
            <GallerySection />
            <Footer />
        </div>
    }
}

#[component]
fn Navbar() -> impl IntoView {
    view! {
        <nav class="fixed top-0 inset-x-0 z-40 border-b border-white/10 backdrop-blur-md transition-all duration-300">
            <div class="max-w-6xl mx-auto px-6 h-16 flex items-center justify-between">
                <a href="#hero" class="text-lg font-bold tracking-tight">"Magic UI"</a>
                <div class="hidden md:flex items-center gap-6 text-sm text-gray-300">
                    <a href="#marquees" class="hover:text-white transition-colors">"Marquees"</a>
                    <a href="#features" class="hover:text-white transition-colors">"Features"</a>
                    <a href="#progress" class="hover:text-white transition-colors">"Progress"</a>
                    <a href="#gallery" class="hover:text-white transition-colors">"Gallery"</a>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section id="hero" class="relative min-h-screen flex items-center justify-center pt-16">
            // Background grid
            <div
                class="absolute inset-0 bg-[linear-gradient(to_right,#ffffff12_1px,transparent_1px),linear-gradient(to_bottom,#ffffff12_1px,transparent_1px)] bg-[size:48px_48px]"
                style="opacity: 0.1"
                aria-hidden="true"
            ></div>

            // Floating orbs
            <div class="absolute inset-0 overflow-hidden" aria-hidden="true">
                <div class="animate-float absolute top-1/4 left-1/5 w-24 h-24 rounded-full bg-white/10 blur-xl"></div>
                <div class="animate-float absolute top-1/3 right-1/4 w-16 h-16 rounded-full bg-white/20 blur-lg"></div>
                <div class="animate-float absolute bottom-1/4 left-1/3 w-32 h-32 rounded-full bg-white/5 blur-2xl"></div>
            </div>

            <div class="relative text-center px-6 max-w-3xl mx-auto">
                <h1 class="animate-fade-in-up text-5xl sm:text-7xl font-bold tracking-tight mb-6">
                    "Magic UI"
                </h1>
                <p class="animate-fade-in-up text-xl text-gray-300 mb-10 leading-relaxed">
                    "Scroll, hover, click and type. Every effect on this page is Rust compiled to WebAssembly."
                </p>
                <div class="animate-fade-in-up flex flex-col sm:flex-row items-center justify-center gap-4">
                    <button class="px-8 py-4 rounded-xl bg-white text-black font-semibold transition-transform">
                        "Get Started"
                    </button>
                    <button class="px-8 py-4 rounded-xl border border-white/20 bg-white/5 font-semibold transition-transform">
                        "View Source"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn MarqueeRow(items: [&'static str; 6], reverse: bool) -> impl IntoView {
    let track_class = if reverse {
        "flex gap-6 w-max animate-marquee-reverse"
    } else {
        "flex gap-6 w-max animate-marquee"
    };

    view! {
        <div class="relative overflow-hidden py-4 cursor-pointer select-none">
            <div class=track_class>
                // The track holds two copies so the loop is seamless
                {items
                    .iter()
                    .chain(items.iter())
                    .map(|item| view! {
                        <span class="px-6 py-3 rounded-full border border-white/10 bg-white/5 text-lg whitespace-nowrap">
                            {*item}
                        </span>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn MarqueeSection() -> impl IntoView {
    view! {
        <section id="marquees" class="py-24 border-y border-white/10">
            <h2 class="section-title text-center text-3xl font-bold mb-4">"Marquees"</h2>
            <p class="text-center text-gray-400 mb-10">
                "Hover to pause, click to change speed, swipe to change direction."
            </p>
            <MarqueeRow items=MARQUEE_TOP reverse=false />
            <MarqueeRow items=MARQUEE_BOTTOM reverse=true />
        </section>
    }
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str, tag: &'static str) -> impl IntoView {
    view! {
        <div class="group p-8 rounded-2xl border border-white/10 bg-white/5 transition-transform duration-200">
            <h3 class="text-xl font-semibold mb-3">{title}</h3>
            <p class="text-gray-400 leading-relaxed mb-6">{description}</p>
            <div class="inline-block text-xs uppercase tracking-widest text-gray-500">{tag}</div>
        </div>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <h2 class="section-title text-center text-3xl font-bold mb-16">"Features"</h2>
                <div class="grid md:grid-cols-3 gap-8">
                    <FeatureCard
                        title="Scroll reveals"
                        description="Sections fade in as they cross one, three and six tenths of the viewport."
                        tag="IntersectionObserver"
                    />
                    <FeatureCard
                        title="Magnetic buttons"
                        description="Buttons lean toward the pointer and ripple where you click."
                        tag="Pointer events"
                    />
                    <FeatureCard
                        title="Adaptive motion"
                        description="Animations calm down when the frame rate drops under thirty."
                        tag="requestAnimationFrame"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProgressBar(label: &'static str, width: Option<&'static str>) -> impl IntoView {
    view! {
        <div>
            <div class="flex justify-between text-sm text-gray-400 mb-2">
                <span>{label}</span>
                <span>{width.unwrap_or("")}</span>
            </div>
            <div class="h-2 rounded-full bg-white/10 overflow-hidden">
                <div class="bg-white h-full rounded-full" style="width: 0" data-width=width></div>
            </div>
        </div>
    }
}

#[component]
fn ProgressSection() -> impl IntoView {
    view! {
        <section id="progress" class="py-24 px-6 bg-white/[0.02]">
            <div class="max-w-4xl mx-auto grid md:grid-cols-2 gap-16 items-center">
                <div class="flex justify-center">
                    <svg class="w-48 h-48 -rotate-90" viewBox="0 0 100 100">
                        <circle cx="50" cy="50" r="40" fill="none" stroke="rgba(255,255,255,0.1)" stroke-width="8" />
                        <circle
                            class="stroke-dasharray"
                            cx="50"
                            cy="50"
                            r="40"
                            fill="none"
                            stroke="white"
                            stroke-width="8"
                            stroke-linecap="round"
                            stroke-dasharray="251.2"
                            stroke-dashoffset="251.2"
                        />
                    </svg>
                </div>
                <div class="space-y-6">
                    <h2 class="section-title text-3xl font-bold">"Progress"</h2>
                    <ProgressBar label="Performance" width=Some("92%") />
                    <ProgressBar label="Accessibility" width=None />
                    <ProgressBar label="Delight" width=None />
                </div>
            </div>
        </section>
    }
}

#[component]
fn GalleryItem(title: &'static str, caption: &'static str, height: &'static str) -> impl IntoView {
    view! {
        <div class="break-inside-avoid mb-6 rounded-2xl border border-white/10 bg-white/5 p-6 cursor-pointer">
            <div class=format!("{height} rounded-xl bg-gradient-to-br from-white/20 to-white/0 mb-4")></div>
            <h3 class="font-semibold">{title}</h3>
            <p class="text-sm text-gray-400">{caption}</p>
        </div>
    }
}

#[component]
fn GallerySection() -> impl IntoView {
    view! {
        <section id="gallery" class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <h2 class="section-title text-center text-3xl font-bold mb-16">"Gallery"</h2>
                <div class="columns-1 sm:columns-2 lg:columns-3 gap-6">
                    <GalleryItem title="Aurora" caption="Soft light over dark water." height="h-48" />
                    <GalleryItem title="Lattice" caption="A grid that breathes." height="h-64" />
                    <GalleryItem title="Orbit" caption="Slow circles around nothing." height="h-40" />
                    <GalleryItem title="Drift" caption="Parallax at half speed." height="h-56" />
                    <GalleryItem title="Pulse" caption="Press space and watch." height="h-44" />
                    <GalleryItem title="Prism" caption="Try the arrow keys, then B and A." height="h-60" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-white/10">
            <div class="max-w-6xl mx-auto px-6 text-center space-y-6">
                <KeyboardHints hints=KeyboardHint::page_shortcuts() />
                <p class="text-sm text-gray-500">"Built with Rust & Leptos."</p>
            </div>
        </footer>
    }
}

/// Keyframes and the classes the effects toggle
#[component]
fn PageStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
            @keyframes fadeOut { from { opacity: 1; } to { opacity: 0; } }
            @keyframes scaleIn {
                from { transform: scale(0.8); opacity: 0; }
                to { transform: scale(1); opacity: 1; }
            }
            @keyframes fade-in-up {
                from { transform: translateY(24px); opacity: 0; }
                to { transform: translateY(0); opacity: 1; }
            }
            @keyframes slide-in-from-right { from { transform: translateX(100%); } to { transform: translateX(0); } }
            @keyframes slide-out-to-right { from { transform: translateX(0); } to { transform: translateX(100%); } }
            @keyframes marquee { from { transform: translateX(0); } to { transform: translateX(-50%); } }
            @keyframes float {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(-20px); }
            }
            @keyframes pulse {
                0%, 100% { transform: scale(1); }
                50% { transform: scale(1.05); }
            }
            @keyframes bounce {
                0%, 100% { transform: translateY(0); }
                40% { transform: translateY(-16px); }
                70% { transform: translateY(-6px); }
            }
            @keyframes rainbow {
                0% { filter: hue-rotate(0deg); }
                100% { filter: hue-rotate(360deg); }
            }

            .animate-fade-in-up { animation: fade-in-up 0.8s ease-out both; animation-play-state: paused; }
            .animate-slide-in-from-right { animation: slide-in-from-right 0.3s ease-out; }
            .animate-marquee { animation: marquee 20s linear infinite; }
            .animate-marquee-reverse { animation: marquee 20s linear infinite reverse; }
            .animate-float { animation: float 3s ease-in-out infinite; }

            .entering-view { opacity: 0.5; transform: translateY(20px); }
            .partially-visible { opacity: 0.8; transform: translateY(10px); }
            .fully-visible { opacity: 1; transform: translateY(0); }
            section, .group { transition: opacity 0.6s ease-out, transform 0.6s ease-out; }

            .cursor-trail {
                position: fixed;
                width: 16px;
                height: 16px;
                border-radius: 50%;
                background-color: rgba(255, 255, 255, 0.5);
                pointer-events: none;
                mix-blend-mode: difference;
                z-index: 9999;
                transition: transform 0.2s ease-out, background-color 0.2s ease-out, opacity 0.2s;
            }

            button { position: relative; overflow: hidden; }
            .ripple {
                position: absolute;
                width: 0;
                height: 0;
                background: rgba(255, 255, 255, 0.6);
                border-radius: 50%;
                transform: translate(-50%, -50%);
                pointer-events: none;
                z-index: 1000;
            }

            .easter-egg-mode * { animation: rainbow 1s linear infinite !important; }

            .reduced-motion * {
                animation-duration: 0.01ms !important;
                animation-iteration-count: 1 !important;
                transition-duration: 0.01ms !important;
            }

            @media (prefers-reduced-motion: reduce) {
                *, *::before, *::after {
                    animation-duration: 0.01ms !important;
                    animation-iteration-count: 1 !important;
                    transition-duration: 0.01ms !important;
                }
            }

            @media (prefers-contrast: high) {
                .bg-white\/5 { background-color: rgba(255, 255, 255, 0.2) !important; }
                .border-white\/10 { border-color: rgba(255, 255, 255, 0.3) !important; }
            }

            button:focus-visible,
            [tabindex]:focus-visible {
                outline: 2px solid white;
                outline-offset: 2px;
                border-radius: 4px;
            }
            "#
        </style>
    }
}
