// Presentation layer - Diagram composition and the viewer page
pub mod html_page;
pub mod plate_geometry;
pub mod svg_document;
