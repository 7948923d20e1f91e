pub mod palette_service;

pub use palette_service::PaletteService;
