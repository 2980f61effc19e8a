#![forbid(unsafe_code)]
//! Routinely — génération locale d'une routine d'entraînement quotidienne.
//!
//! - Chaque jour, un sous-ensemble de taille fixe est tiré dans un univers d'indices.
//! - Rotation équitable : un indice sauté trop longtemps est imposé le lendemain.
//! - Source aléatoire injectée (graine fixe pour des tests déterministes).
//! - Rendu texte/Markdown et exports JSON/CSV en dehors du cœur.

#[cfg(feature = "serde")]
pub mod io;
pub mod labels;
pub mod model;
pub mod render;
pub mod routine;

pub use labels::{load_labels_or_warn, LabelError, Labels};
pub use model::{Schedule, Selection, SelectionCounts};
pub use render::{selection_summary, MarkdownTable, ScheduleRenderer, TextListing};
pub use routine::{day_count, RoutineConfig, RoutineError, RoutineGenerator, SkipTracker};
