//! Read-only code viewer with line numbers and highlighted lines.
//!
//! Source is shown as plain text; the language only labels the header.

use leptos::prelude::*;

/// One rendered row of a [`CodePanel`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeLine {
	/// 1-based.
	pub number: usize,
	pub text: String,
	pub highlighted: bool,
}

/// Splits `code` on newlines into numbered rows.
pub fn numbered_lines(code: &str, highlight: &[usize]) -> Vec<CodeLine> {
	code.split('\n')
		.enumerate()
		.map(|(i, line)| CodeLine {
			number: i + 1,
			text: line.to_string(),
			highlighted: highlight.contains(&(i + 1)),
		})
		.collect()
}

#[component]
pub fn CodePanel(
	#[prop(into)] code: String,
	#[prop(into, default = "javascript".to_string())] language: String,
	#[prop(optional)] highlight_lines: Vec<usize>,
	#[prop(default = true)] show_line_numbers: bool,
	#[prop(optional, into)] title: Option<String>,
	#[prop(into, default = String::new())] class: String,
) -> impl IntoView {
	let header = title.map(|title| {
		view! {
			<div class="cosmic-code-header">
				<h3>{title}</h3>
				<span class="cosmic-code-language">{language.clone()}</span>
			</div>
		}
	});

	let body = if show_line_numbers {
		numbered_lines(&code, &highlight_lines)
			.into_iter()
			.map(|line| {
				let row_class = if line.highlighted {
					"cosmic-code-row cosmic-code-highlight"
				} else {
					"cosmic-code-row"
				};
				// Keep blank rows from collapsing.
				let text = if line.text.is_empty() { "\n".to_string() } else { line.text };
				view! {
					<div class=row_class>
						<span class="cosmic-code-number">{line.number}</span>
						<span class="cosmic-code-text">{text}</span>
					</div>
				}
			})
			.collect_view()
			.into_any()
	} else {
		code.into_any()
	};

	view! {
		<div class=format!("cosmic-code-panel {class}")>
			{header}
			<pre class="cosmic-code-pre">
				<code>{body}</code>
			</pre>
		</div>
	}
}
