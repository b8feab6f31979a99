use leptos::prelude::*;

use crate::models::ShowcaseItem;

/// Index reached by moving `delta` slides from `current`, wrapping at both ends
pub fn step(current: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (current as isize + delta).rem_euclid(len) as usize
}

#[component]
pub fn Carousel(items: Vec<ShowcaseItem>) -> impl IntoView {
    let len = items.len();
    let (current, set_current) = signal(0usize);
    let items = StoredValue::new(items);

    let slide = move || {
        items.with_value(|items| {
            items.get(current.get()).cloned().map(|item| {
                let alt = item.title.clone();
                view! {
                    <div class="carousel-slide">
                        <div class="carousel-image">
                            <img src=item.image alt=alt/>
                        </div>
                        <div class="carousel-caption">
                            <h3>{item.title}</h3>
                            <p>{item.description}</p>
                        </div>
                    </div>
                }
            })
        })
    };

    view! {
        <div class="carousel">
            {slide}
            <div class="carousel-controls">
                <button
                    class="btn btn-round"
                    aria-label="Previous slide"
                    disabled=len < 2
                    on:click=move |_| set_current.update(|i| *i = step(*i, len, -1))
                >
                    "←"
                </button>
                <span class="carousel-position">{move || format!("{} / {}", current.get() + 1, len.max(1))}</span>
                <button
                    class="btn btn-round"
                    aria-label="Next slide"
                    disabled=len < 2
                    on:click=move |_| set_current.update(|i| *i = step(*i, len, 1))
                >
                    "→"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_in_both_directions() {
        assert_eq!(step(0, 5, -1), 4);
        assert_eq!(step(4, 5, 1), 0);
        assert_eq!(step(2, 5, 1), 3);
        assert_eq!(step(0, 0, 1), 0);
    }
}
