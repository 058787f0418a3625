// Stellar object domain model and catalog row normalization
use thiserror::Error;

/// One raw catalog row as returned by the fetch layer, in the fixed field
/// order [xFocal, yFocal, objectId, plateId, ra, dec, class].
pub type RawObjectRow = [String; 7];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog record at row {row}: field '{field}' value '{value}' is not a finite number")]
    MalformedRecord {
        row: usize,
        field: &'static str,
        value: String,
    },
}

/// One catalog object on a plate. Coordinates are focal-plane units from the
/// catalog, not pixels; ra/dec are carried through as opaque text for the
/// object detail hyperlink.
#[derive(Debug, Clone)]
pub struct StellarObject {
    pub focal_x: f64,
    pub focal_y: f64,
    pub object_id: String,
    pub plate_id: String,
    pub right_ascension: String,
    pub declination: String,
    pub object_class: String,
}

impl StellarObject {
    fn from_row(row_index: usize, row: &RawObjectRow) -> Result<Self, CatalogError> {
        let focal_x = parse_finite(row_index, "xFocal", &row[0])?;
        let focal_y = parse_finite(row_index, "yFocal", &row[1])?;

        Ok(Self {
            focal_x,
            focal_y,
            object_id: row[2].clone(),
            plate_id: row[3].clone(),
            right_ascension: row[4].clone(),
            declination: row[5].clone(),
            object_class: row[6].clone(),
        })
    }
}

fn parse_finite(row: usize, field: &'static str, value: &str) -> Result<f64, CatalogError> {
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(CatalogError::MalformedRecord {
            row,
            field,
            value: value.to_string(),
        }),
    }
}

/// Convert raw fetched rows into typed records, preserving input order.
/// Order matters downstream: it drives SVG paint order, so later records
/// draw over earlier ones. A coordinate that does not parse is an error for
/// the whole plate, never a silent zero.
pub fn normalize_rows(rows: &[RawObjectRow]) -> Result<Vec<StellarObject>, CatalogError> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| StellarObject::from_row(i, row))
        .collect()
}
