use crate::console::Console;
use crate::render::controls::{render_preferences_form, render_upload_panel, render_weights_panel};
use crate::render::results::render_results;

/// The full console page. Every interaction re-renders it from state.
pub fn render_page(console: &Console) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Job Preference Console</title>
</head>
<body>
<aside class="sidebar">
{form}
{upload}
{weights}
</aside>
<main>
<section id="results-area">{results}</section>
</main>
</body>
</html>
"#,
        form = render_preferences_form(console.fields(), console.submission()),
        upload = render_upload_panel(console.upload()),
        weights = render_weights_panel(console.weights()),
        results = render_results(console.session()),
    )
}
