// Rendering Pipeline: pure functions from console state to HTML.
// Every piece of server- or user-supplied text goes through `escape_html`.

pub mod controls;
pub mod currency;
pub mod escape;
pub mod page;
pub mod results;
pub mod validation;

pub use page::render_page;
