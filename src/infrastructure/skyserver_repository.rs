// SDSS SkyServer repository implementation
use crate::application::catalog_repository::CatalogRepository;
use crate::domain::stellar_object::RawObjectRow;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

/// Field keys in the order the normalizer expects rows to carry them.
const ROW_FIELDS: [&str; 7] = ["xFocal", "yFocal", "ObjId", "plate", "ra", "dec", "class"];

#[derive(Debug, Clone)]
pub struct SkyServerRepository {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SqlSearchTable {
    #[serde(rename = "TableName")]
    #[allow(dead_code)]
    table_name: String,
    #[serde(rename = "Rows", default)]
    rows: Vec<serde_json::Value>,
}

impl SkyServerRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn build_query_url(&self, plate_number: &str) -> String {
        let sql = format!(
            "SELECT plate, ObjId, xFocal, yFocal, s.ra, s.dec, class \
             FROM PhotoObj AS p \
             JOIN SpecObj AS s ON s.bestobjid = p.objid \
             WHERE s.plate = {plate_number} \
             ORDER BY xFocal asc"
        );

        format!(
            "{}?searchtool=SQL&TaskName=Skyserver.Search.SQL&syntax=NoSyntax&ReturnHtml=true&cmd={}&format=jsonx",
            self.base_url,
            urlencoding::encode(&sql)
        )
    }

    async fn execute_query(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to SkyServer")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("SkyServer query failed with status {}: {}", status, body);
        }

        response
            .text()
            .await
            .context("Failed to read SkyServer response body")
    }
}

#[async_trait]
impl CatalogRepository for SkyServerRepository {
    async fn fetch_plate_objects(&self, plate_number: &str) -> Result<Vec<RawObjectRow>> {
        let url = self.build_query_url(plate_number);
        tracing::debug!("executing SkyServer query: {}", url);

        let body = self.execute_query(&url).await?;
        parse_jsonx_rows(&body)
    }
}

/// Parse a `jsonx` response body: an array of result tables, each with a
/// "Rows" array of keyed objects. Only the first table is meaningful; rows
/// come back in server order and stay that way.
fn parse_jsonx_rows(body: &str) -> Result<Vec<RawObjectRow>> {
    let tables: Vec<SqlSearchTable> =
        serde_json::from_str(body).context("Failed to parse SkyServer jsonx response")?;

    let Some(table) = tables.first() else {
        return Ok(Vec::new());
    };

    let mut rows = Vec::with_capacity(table.rows.len());
    for (i, raw) in table.rows.iter().enumerate() {
        let mut fields: RawObjectRow = Default::default();
        for (slot, key) in fields.iter_mut().zip(ROW_FIELDS) {
            *slot = field_text(raw, key)
                .with_context(|| format!("row {} of the SkyServer result", i))?;
        }
        rows.push(fields);
    }

    Ok(rows)
}

fn field_text(row: &serde_json::Value, key: &str) -> Result<String> {
    let value = row
        .get(key)
        .with_context(|| format!("missing field '{}'", key))?;

    match value {
        serde_json::Value::String(s) => Ok(s.clone()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => anyhow::bail!("field '{}' has unexpected value: {}", key, other),
    }
}
