pub mod pair;
pub mod panorama;

pub use pair::{stitch_pair, Stitched};
pub use panorama::{PanoramaBuilder, TemplateMatch};
