use crate::libs::error::{ChartError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const TOPOLOGY_FIELD: &str = "Topology";

/// One value of a result row, as sent by the query backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Null,
}

impl Cell {
    /// Numeric reading of the cell. Text cells are parsed after trimming.
    ///
    /// ```
    /// # use quadview::libs::result::Cell;
    /// assert_eq!(Cell::Number(1.5).as_f64(), Some(1.5));
    /// assert_eq!(Cell::Text(" 42 ".to_string()).as_f64(), Some(42.0));
    /// assert_eq!(Cell::Text("NC_000001".to_string()).as_f64(), None);
    /// assert_eq!(Cell::Null.as_f64(), None);
    /// ```
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Cell::Number(n) => *n,
            Cell::Text(s) => s.trim().parse::<f64>().ok()?,
            Cell::Null => return None,
        };
        value.is_finite().then_some(value)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Text(s) => s.is_empty(),
            Cell::Null => true,
            Cell::Number(_) => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Null => Ok(()),
        }
    }
}

/// The declared type tag of a result set, resolved once at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Fasta,
    Gff,
    Score,
    Generic,
}

impl ResultKind {
    /// ```
    /// # use quadview::libs::result::ResultKind;
    /// assert_eq!(ResultKind::from_tag("result_fasta"), ResultKind::Fasta);
    /// assert_eq!(ResultKind::from_tag("result_gff"), ResultKind::Gff);
    /// assert_eq!(ResultKind::from_tag("result_score"), ResultKind::Score);
    /// assert_eq!(ResultKind::from_tag("result_none"), ResultKind::Generic);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "result_fasta" => ResultKind::Fasta,
            "result_gff" => ResultKind::Gff,
            "result_score" => ResultKind::Score,
            _ => ResultKind::Generic,
        }
    }

    /// Score and GFF results carry an accession column and a numeric column
    pub fn is_scored(&self) -> bool {
        matches!(self, ResultKind::Gff | ResultKind::Score)
    }
}

/// What a result set is, as far as charting is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultView {
    pub kind: ResultKind,
    /// Index of the `Topology` field, if any
    pub topology: Option<usize>,
}

/// Tabular output of one executed query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(rename = "type", default)]
    pub tag: String,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(rename = "result", default)]
    pub rows: Vec<Vec<Cell>>,
}

impl ResultSet {
    pub fn new(tag: &str, fields: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            tag: tag.to_string(),
            fields,
            rows,
        }
    }

    /// ```
    /// # use quadview::libs::result::{Cell, ResultSet};
    /// let json = r#"{"type":"result_score","fields":["Accession","Score"],"result":[["NC_1",0.5]]}"#;
    /// let set = ResultSet::from_json(json).unwrap();
    /// assert_eq!(set.len(), 1);
    /// assert_eq!(set.cell(0, 1), Some(&Cell::Number(0.5)));
    /// ```
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Resolves the type tag and the topology column.
    pub fn view(&self) -> ResultView {
        ResultView {
            kind: ResultKind::from_tag(&self.tag),
            topology: self.fields.iter().position(|f| f == TOPOLOGY_FIELD),
        }
    }

    /// A column is addressed either by its field name or by a 0-based index.
    ///
    /// ```
    /// # use quadview::libs::result::ResultSet;
    /// let set = ResultSet::new("", vec!["Accession".into(), "Score".into()], vec![]);
    /// assert_eq!(set.column_index("Score").unwrap(), 1);
    /// assert_eq!(set.column_index("0").unwrap(), 0);
    /// assert!(set.column_index("Sequence").is_err());
    /// ```
    pub fn column_index(&self, key: &str) -> Result<usize> {
        if let Some(idx) = self.fields.iter().position(|f| f == key) {
            return Ok(idx);
        }
        match key.parse::<usize>() {
            Ok(idx) if idx < self.fields.len() => Ok(idx),
            _ => Err(ChartError::UnknownColumn(key.to_string())),
        }
    }
}
