// Plate service - Use case for rendering a batch of plates
use crate::application::catalog_repository::CatalogRepository;
use crate::application::diagram_store::DiagramStore;
use crate::domain::plate::Plate;
use crate::domain::stellar_object::normalize_rows;
use crate::presentation::html_page::render_viewer_page;
use crate::presentation::svg_document::{compose_plate_svg, RenderSettings};
use anyhow::Context;
use std::sync::Arc;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rendered: usize,
    pub skipped: usize,
    pub failed: usize,
}

#[derive(Clone)]
pub struct PlateService {
    repository: Arc<dyn CatalogRepository>,
    store: Arc<dyn DiagramStore>,
    settings: RenderSettings,
}

impl PlateService {
    pub fn new(
        repository: Arc<dyn CatalogRepository>,
        store: Arc<dyn DiagramStore>,
        settings: RenderSettings,
    ) -> Self {
        Self {
            repository,
            store,
            settings,
        }
    }

    /// Render every plate in the list. Plates are independent: a bad plate
    /// number is skipped and a failed fetch or malformed record aborts only
    /// that plate's rendering.
    pub async fn run(&self, plate_numbers: &[String]) -> RunSummary {
        let mut summary = RunSummary::default();

        for entry in plate_numbers {
            let Some(plate) = Plate::new(entry) else {
                tracing::warn!("plate number '{}' is not a whole number, skipping", entry);
                summary.skipped += 1;
                continue;
            };

            match self.process_plate(&plate).await {
                Ok(objects) => {
                    tracing::info!("plate {} rendered with {} objects", plate.number, objects);
                    summary.rendered += 1;
                }
                Err(e) => {
                    tracing::error!("plate {} failed: {:#}", plate.number, e);
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    async fn process_plate(&self, plate: &Plate) -> anyhow::Result<usize> {
        let rows = self
            .repository
            .fetch_plate_objects(&plate.number)
            .await
            .with_context(|| format!("fetching catalog rows for plate {}", plate.number))?;

        let objects = normalize_rows(&rows)
            .with_context(|| format!("normalizing catalog rows for plate {}", plate.number))?;

        if objects.is_empty() {
            tracing::info!("plate {} has no catalog objects, rendering bare plate", plate.number);
        }

        let svg = compose_plate_svg(&objects, &self.settings);
        let html = render_viewer_page(&plate.number, &svg);

        self.store.save_svg(plate, &svg)?;
        self.store.save_html(plate, &html)?;

        Ok(objects.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stellar_object::RawObjectRow;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct FakeRepository {
        rows_by_plate: HashMap<String, Vec<RawObjectRow>>,
    }

    #[async_trait]
    impl CatalogRepository for FakeRepository {
        async fn fetch_plate_objects(
            &self,
            plate_number: &str,
        ) -> anyhow::Result<Vec<RawObjectRow>> {
            match self.rows_by_plate.get(plate_number) {
                Some(rows) => Ok(rows.clone()),
                None => anyhow::bail!("server unreachable"),
            }
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        saved: Mutex<Vec<(String, String)>>,
    }

    impl DiagramStore for MemoryStore {
        fn save_svg(&self, plate: &Plate, svg: &str) -> anyhow::Result<()> {
            self.saved
                .lock()
                .unwrap()
                .push((plate.svg_file_name(), svg.to_string()));
            Ok(())
        }

        fn save_html(&self, plate: &Plate, html: &str) -> anyhow::Result<()> {
            self.saved
                .lock()
                .unwrap()
                .push((plate.html_file_name(), html.to_string()));
            Ok(())
        }
    }

    fn row(fields: [&str; 7]) -> RawObjectRow {
        fields.map(|f| f.to_string())
    }

    fn service(
        rows_by_plate: HashMap<String, Vec<RawObjectRow>>,
    ) -> (PlateService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        let service = PlateService::new(
            Arc::new(FakeRepository { rows_by_plate }),
            store.clone(),
            RenderSettings::default(),
        );
        (service, store)
    }

    #[tokio::test]
    async fn test_batch_outcomes_are_independent() {
        let mut rows = HashMap::new();
        rows.insert(
            "2534".to_string(),
            vec![row(["5", "5", "id1", "2534", "10", "20", "STAR"])],
        );
        // 777 has a malformed coordinate; 9999 is not known to the fake
        // repository and fails at fetch time.
        rows.insert(
            "777".to_string(),
            vec![row(["N/A", "5", "id2", "777", "10", "20", "STAR"])],
        );
        let (service, store) = service(rows);

        let plates = vec![
            "2534".to_string(),
            "not-a-plate".to_string(),
            "777".to_string(),
            "9999".to_string(),
        ];
        let summary = service.run(&plates).await;

        assert_eq!(
            summary,
            RunSummary {
                rendered: 1,
                skipped: 1,
                failed: 2,
            }
        );

        let saved = store.saved.lock().unwrap();
        let names: Vec<&str> = saved.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["2534.svg", "2534.html"]);
    }

    #[tokio::test]
    async fn test_empty_plate_still_renders_and_persists() {
        let mut rows = HashMap::new();
        rows.insert("1000".to_string(), Vec::new());
        let (service, store) = service(rows);

        let summary = service.run(&["1000".to_string()]).await;
        assert_eq!(summary.rendered, 1);

        let saved = store.saved.lock().unwrap();
        assert_eq!(saved.len(), 2);
        let (_, svg) = &saved[0];
        assert!(svg.contains("id='Plate-Edge-Exterior-Stroke'"));
        assert!(!svg.contains("class='plateDot'"));
    }

    #[tokio::test]
    async fn test_rendered_documents_carry_the_objects() {
        let mut rows = HashMap::new();
        rows.insert(
            "2534".to_string(),
            vec![
                row(["5", "5", "id1", "2534", "10", "20", "STAR"]),
                row(["-10", "30", "id2", "2534", "11", "21", "GALAXY"]),
            ],
        );
        let (service, store) = service(rows);
        service.run(&["2534".to_string()]).await;

        let saved = store.saved.lock().unwrap();
        let (_, svg) = &saved[0];
        assert_eq!(svg.matches("class='plateDot'").count(), 2);
        let (_, html) = &saved[1];
        assert!(html.contains("<title>Plate 2534</title>"));
        assert!(html.contains("class='plateDot'"));
    }
}
