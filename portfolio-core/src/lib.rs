//! Browser-independent logic of the portfolio page: the particle background,
//! the bilingual dictionary and language switcher, and the detail modal.

pub mod constants;
pub mod cursor;
pub mod i18n;
pub mod modal;
pub mod nav;
pub mod particles;
pub mod switcher;

pub use i18n::{Dictionary, Entry, ImageEntry, Lang};
pub use modal::ModalContent;
pub use particles::{FieldConfig, Painter, Particle, ParticleField};
pub use switcher::{Locale, Node, Page};
