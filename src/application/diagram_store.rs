// Persistence trait for rendered plate documents
use crate::domain::plate::Plate;

pub trait DiagramStore: Send + Sync {
    fn save_svg(&self, plate: &Plate, svg: &str) -> anyhow::Result<()>;
    fn save_html(&self, plate: &Plate, html: &str) -> anyhow::Result<()>;
}
