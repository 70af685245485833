use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};

/// Served by the host from the workspace `assets/` directory.
pub const HERO_IMAGE: &str = "/assets/img/hero.svg";

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="w-full min-h-[80vh] bg-purple-100 flex items-center">
            <div class="max-w-7xl mx-auto px-6 py-20 grid grid-cols-1 md:grid-cols-2 gap-12">
                <div class="flex flex-col justify-center animate-enter-left">
                    <h1 class="text-6xl font-bold font-display mb-6 leading-tight">
                        "Shop the Future,"
                        <br/>
                        <span class="text-purple-600">"Today."</span>
                    </h1>
                    <p class="text-xl mb-8 text-gray-700">
                        "Discover our curated collection of innovative products that blend style with functionality."
                    </p>
                    <button class="w-fit px-8 py-4 bg-black text-white font-bold text-lg border-2 border-black \
                                   shadow-[8px_8px_0px_0px_rgba(147,51,234,1)] transition-all hover:scale-105 \
                                   hover:shadow-[4px_4px_0px_0px_rgba(147,51,234,1)]">
                        "Explore Collection"
                    </button>
                </div>

                <div class="relative h-[500px] border-4 border-black shadow-[8px_8px_0px_0px_rgba(0,0,0,1)] animate-enter-right">
                    <img
                        src=HERO_IMAGE
                        alt="Hero Image"
                        class="w-full h-full object-cover"
                        width="600"
                        height="500"
                    />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn hero_image_ships_with_the_site() {
        let on_disk = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join(HERO_IMAGE.trim_start_matches('/'));
        assert!(on_disk.is_file(), "missing {}", on_disk.display());
    }
}
