use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReasonCode {
    /// Loop length configuration
    LengthMatch,
    /// Loop length sequence derivation
    LengthDt,
    /// Loop nucleotide composition
    Composition,
    Other(String),
}

impl ReasonCode {
    pub fn parse(code: &str) -> Self {
        match code {
            "length_match" => ReasonCode::LengthMatch,
            "length_dt" => ReasonCode::LengthDt,
            "composition" => ReasonCode::Composition,
            other => ReasonCode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ReasonCode::LengthMatch => "length_match",
            ReasonCode::LengthDt => "length_dt",
            ReasonCode::Composition => "composition",
            ReasonCode::Other(code) => code,
        }
    }
}

impl Serialize for ReasonCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One piece of evidence for a topology candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reason {
    pub code: ReasonCode,
    pub argument: String,
    pub p_value: Option<f64>,
}

impl Reason {
    pub fn new(code: &str, argument: &str, p_value: Option<f64>) -> Self {
        Self {
            code: ReasonCode::parse(code),
            argument: argument.to_string(),
            p_value,
        }
    }

    /// All three fields were present in the cell
    pub fn is_complete(&self) -> bool {
        !self.argument.is_empty() && self.p_value.is_some()
    }

    /// Explanation with the argument wrapped by `emph`.
    /// Incomplete reasons always use the generic `<code> is <argument>` form.
    fn explain(&self, emph: impl Fn(&str) -> String, l1_l3: &str) -> String {
        if !self.is_complete() {
            return format!("{} is {}", self.code.as_str(), self.argument);
        }
        match &self.code {
            ReasonCode::LengthMatch => format!(
                "{} length configuration {} seen in this GQ family.",
                l1_l3,
                emph(&self.argument)
            ),
            ReasonCode::LengthDt => format!(
                "{} length sequence derivation {} seen in this GQ family.",
                l1_l3,
                emph(&self.argument)
            ),
            ReasonCode::Composition => {
                format!("Loops nucleotide composition {}", emph(&self.argument))
            }
            ReasonCode::Other(code) => format!("{} is {}", code, self.argument),
        }
    }

    /// HTML fragment for the evidence list.
    ///
    /// ```
    /// # use quadview::libs::topology::Reason;
    /// let reason = Reason::new("composition", "AT-rich", Some(0.04));
    /// assert_eq!(
    ///     reason.to_html(),
    ///     "Loops nucleotide composition <b>AT-rich</b> <i>( P-value = 0.04 )</i>"
    /// );
    /// ```
    pub fn to_html(&self) -> String {
        let mut html = self.explain(
            |arg| format!("<b>{}</b>", arg),
            "L<sub>1</sub>-L<sub>3</sub>",
        );
        if let Some(p) = self.p_value {
            html.push_str(&format!(" <i>( P-value = {} )</i>", p));
        }
        html
    }
}

impl fmt::Display for Reason {
    /// Plain text explanation.
    ///
    /// ```
    /// # use quadview::libs::topology::Reason;
    /// let reason = Reason::new("length_match", "config1", Some(0.01));
    /// assert_eq!(
    ///     reason.to_string(),
    ///     "L1-L3 length configuration config1 seen in this GQ family. ( P-value = 0.01 )"
    /// );
    /// assert_eq!(Reason::new("gc", "high", Some(0.5)).to_string(), "gc is high ( P-value = 0.5 )");
    /// assert_eq!(Reason::new("length_dt", "", None).to_string(), "length_dt is ");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.explain(|arg| arg.to_string(), "L1-L3"))?;
        if let Some(p) = self.p_value {
            write!(f, " ( P-value = {} )", p)?;
        }
        Ok(())
    }
}
