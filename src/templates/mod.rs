//! HTML templates and styling for the link directory.
//!
//! This module contains all CSS styles, JavaScript code, and HTML
//! generation functions for the web interface.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constants
//! - `components` - Shared pieces (escaping, base template, site cards)
//! - `public` - The tag-grouped listing with search bar and scroll-spy
//! - `admin` - Login form and the admin panel with its page script

mod admin;
mod components;
mod public;
mod styles;

pub use admin::{render_admin, render_login};
pub use components::{base_html, html_escape, js_escape, site_card};
pub use public::{render_index, render_search_results};
pub use styles::STYLE;
