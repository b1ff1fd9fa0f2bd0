use crate::libs::config::ChartConfig;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // RefSeq accession prefixes, e.g. NC_, NM_, XR_
    static ref RE_REFSEQ: Regex = Regex::new(r"^[ANYXZ][A-Z]_").unwrap();
    // UTRdb loci, 5' or 3' human UTRs
    static ref RE_UTR: Regex = Regex::new(r"^[35]HSA").unwrap();
}

/// Database an accession resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accession {
    Nucleotide,
    UtrLocus,
    Unknown,
}

impl Accession {
    /// First matching pattern wins.
    ///
    /// ```
    /// # use quadview::libs::accession::Accession;
    /// assert_eq!(Accession::classify("NC_000001"), Accession::Nucleotide);
    /// assert_eq!(Accession::classify("5HSA000123"), Accession::UtrLocus);
    /// assert_eq!(Accession::classify("XYZ"), Accession::Unknown);
    /// ```
    pub fn classify(accession: &str) -> Self {
        if RE_REFSEQ.is_match(accession) {
            Accession::Nucleotide
        } else if RE_UTR.is_match(accession) {
            Accession::UtrLocus
        } else {
            Accession::Unknown
        }
    }
}

/// External reference URL of an accession, `None` for plain text.
///
/// ```
/// # use quadview::libs::accession::link;
/// # use quadview::libs::config::ChartConfig;
/// let config = ChartConfig::default();
/// assert_eq!(
///     link("NC_000001", &config).unwrap(),
///     "http://www.ncbi.nlm.nih.gov/nuccore/NC_000001"
/// );
/// assert_eq!(
///     link("3HSA1234", &config).unwrap(),
///     "http://utrdb.ba.itb.cnr.it/getutr/3HSA1234/1"
/// );
/// assert_eq!(link("XYZ", &config), None);
/// ```
pub fn link(accession: &str, config: &ChartConfig) -> Option<String> {
    match Accession::classify(accession) {
        Accession::Nucleotide => Some(format!("{}{}", config.nuccore_base, accession)),
        Accession::UtrLocus => Some(format!("{}{}/1", config.utrdb_base, accession)),
        Accession::Unknown => None,
    }
}
