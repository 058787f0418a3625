// Filesystem store for rendered plate documents
use crate::application::diagram_store::DiagramStore;
use crate::domain::plate::Plate;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStore {
    svg_dir: PathBuf,
    html_dir: PathBuf,
}

impl FileStore {
    pub fn new(output_dir: &str) -> Self {
        let root = Path::new(output_dir);
        Self {
            svg_dir: root.join("svg"),
            html_dir: root.join("html"),
        }
    }

    fn write(dir: &Path, file_name: &str, contents: &str) -> anyhow::Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        let path = dir.join(file_name);
        fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))
    }
}

impl DiagramStore for FileStore {
    fn save_svg(&self, plate: &Plate, svg: &str) -> anyhow::Result<()> {
        Self::write(&self.svg_dir, &plate.svg_file_name(), svg)
    }

    fn save_html(&self, plate: &Plate, html: &str) -> anyhow::Result<()> {
        Self::write(&self.html_dir, &plate.html_file_name(), html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_land_under_svg_and_html_dirs() {
        let root = std::env::temp_dir().join(format!("platemaker-store-{}", std::process::id()));
        let store = FileStore::new(root.to_str().unwrap());
        let plate = Plate::new("2534").unwrap();

        store.save_svg(&plate, "<svg/>").unwrap();
        store.save_html(&plate, "<html></html>").unwrap();

        let svg = fs::read_to_string(root.join("svg").join("2534.svg")).unwrap();
        let html = fs::read_to_string(root.join("html").join("2534.html")).unwrap();
        assert_eq!(svg, "<svg/>");
        assert_eq!(html, "<html></html>");

        fs::remove_dir_all(&root).unwrap();
    }
}
