//! Declarative slide-deck assembly.
//!
//! Structured content goes in through template structs ([`layout`]), comes
//! out as positioned shapes on a fixed canvas ([`model`]), is collected in
//! call order by a [`Presentation`], and is written once as a `.pptx`
//! ([`pptx`]).
//!
//! ```no_run
//! use slidecraft::{BulletSlide, Presentation, TitleSlide};
//!
//! # fn main() -> Result<(), slidecraft::DeckError> {
//! let mut deck = Presentation::default();
//! deck.add(TitleSlide::new("Quarterly review").subtitle("Q3"))?
//!     .add(BulletSlide::new("Highlights", ["Shipped v2", "Halved build times"]))?;
//! deck.finalize("review.pptx")?;
//! # Ok(())
//! # }
//! ```

pub mod deck;
pub mod errors;
pub mod khuta;
pub mod layout;
pub mod log;
pub mod model;
pub mod pptx;
pub mod theme;
pub mod types;

pub use deck::Presentation;
pub use errors::{DeckError, GeometryError, TableError, WriteError};
pub use layout::{
    ArchitectureSlide, BulletSlide, Column, FlowSlide, FlowStep, Layer, ScoreBand, ScoreSlide,
    SectionSlide, SlideContent, TableSlide, Template, TemplateKind, TitleSlide, TwoColumnSlide,
};
pub use model::{Canvas, Slide};
pub use pptx::{PptxWriter, Serializer};
pub use theme::{Rgb, Swatch, Theme};
