//! Page chrome: the navigation bar and the frosted card container.

use leptos::ev;
use leptos::prelude::*;

/// Scroll offset (px) after which the navbar gains its solid background.
const SCROLL_THRESHOLD: f64 = 20.0;

/// A top-level navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
	pub label: &'static str,
	pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
	NavItem { label: "Home", href: "/" },
	NavItem { label: "Algorithms", href: "/algorithms" },
	NavItem { label: "Data Structures", href: "/data-structures" },
	NavItem { label: "Visualize", href: "/visualize" },
];

/// Visual flavour of a [`Card`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
	#[default]
	Default,
	Pulse,
	Elevated,
}

/// CSS classes for a card with the given options.
pub fn card_class(variant: CardVariant, hoverable: bool, extra: &str) -> String {
	let mut classes = vec!["cosmic-card"];
	match variant {
		CardVariant::Default => {}
		CardVariant::Pulse => classes.push("cosmic-card-pulse"),
		CardVariant::Elevated => classes.push("cosmic-card-elevated"),
	}
	if hoverable {
		classes.push("cosmic-card-hoverable");
	}
	if !extra.is_empty() {
		classes.push(extra);
	}
	classes.join(" ")
}

#[component]
pub fn Card(
	#[prop(default = CardVariant::Default)] variant: CardVariant,
	#[prop(default = true)] hoverable: bool,
	#[prop(into, default = String::new())] class: String,
	children: Children,
) -> impl IntoView {
	view! { <div class=card_class(variant, hoverable, &class)>{children()}</div> }
}

/// Fixed navigation bar that turns opaque once the page scrolls.
#[component]
pub fn Navbar() -> impl IntoView {
	let scrolled = RwSignal::new(false);
	let menu_open = RwSignal::new(false);

	let handle = window_event_listener(ev::scroll, move |_| {
		let y = window().scroll_y().unwrap_or(0.0);
		scrolled.set(y > SCROLL_THRESHOLD);
	});
	on_cleanup(move || handle.remove());

	let links = move || {
		NAV_ITEMS
			.iter()
			.map(|item| {
				view! {
					<a class="cosmic-nav-link" href=item.href on:click=move |_| menu_open.set(false)>
						{item.label}
					</a>
				}
			})
			.collect_view()
	};

	view! {
		<nav class=move || if scrolled.get() { "cosmic-nav cosmic-nav-scrolled" } else { "cosmic-nav" }>
			<div class="cosmic-nav-inner">
				<a href="/" class="cosmic-nav-logo">
					<span class="cosmic-nav-logo-primary">"DSA"</span>
					<span class="cosmic-nav-logo-accent">"Learn"</span>
				</a>
				<div class="cosmic-nav-links">{links}</div>
				<button
					class="cosmic-nav-toggle"
					aria-label="Toggle mobile menu"
					aria-expanded=move || menu_open.get().to_string()
					on:click=move |_| menu_open.update(|open| *open = !*open)
				>
					{move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
				</button>
			</div>
			<Show when=move || menu_open.get()>
				<div class="cosmic-nav-mobile">{links}</div>
			</Show>
		</nav>
	}
}
