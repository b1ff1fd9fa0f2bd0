use super::reason::Reason;
use super::TopologyCandidate;

/// Decodes every candidate of a topology cell, in cell order.
///
/// Never fails: missing parts decode as empty strings or absent p-values.
///
/// ```
/// # use quadview::libs::topology::{decode, ReasonCode};
/// let candidates =
///     decode("GQ1:ClassA/length_match:config1:0.01,composition:AT-rich:0.04");
/// assert_eq!(candidates.len(), 1);
///
/// let gq = &candidates[0];
/// assert_eq!(gq.topology_code, "GQ1");
/// assert_eq!(gq.name, "ClassA");
/// assert_eq!(gq.reasons.len(), 2);
/// assert_eq!(gq.reasons[0].code, ReasonCode::LengthMatch);
/// assert_eq!(gq.reasons[0].argument, "config1");
/// assert_eq!(gq.reasons[0].p_value, Some(0.01));
/// assert_eq!(gq.reasons[1].code, ReasonCode::Composition);
/// assert_eq!(gq.reasons[1].argument, "AT-rich");
/// assert_eq!(gq.reasons[1].p_value, Some(0.04));
/// ```
pub fn decode(cell: &str) -> Vec<TopologyCandidate> {
    cell.split(' ')
        .filter(|part| !part.is_empty())
        .map(parse_candidate)
        .collect()
}

/// `code:name/reason,reason`
fn parse_candidate(text: &str) -> TopologyCandidate {
    let (head, reasons) = text.split_once('/').unwrap_or((text, ""));
    let (code, name) = head.split_once(':').unwrap_or((head, ""));

    TopologyCandidate {
        topology_code: code.to_string(),
        name: name.to_string(),
        reasons: reasons
            .split(',')
            .filter(|r| !r.is_empty())
            .map(parse_reason)
            .collect(),
    }
}

/// `code:argument:p-value`, anything past the third field is ignored
fn parse_reason(text: &str) -> Reason {
    let mut fields = text.split(':');
    let code = fields.next().unwrap_or_default();
    let argument = fields.next().unwrap_or_default();
    let p_value = fields.next().and_then(|p| p.trim().parse::<f64>().ok());

    Reason::new(code, argument, p_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::topology::ReasonCode;

    #[test]
    fn several_candidates_keep_order() {
        let candidates = decode(
            "LPL:propeller/length_match:1-1-1:0.001 DDL:basket/composition:TTA:0.3,length_dt:2-2-x:0.02",
        );
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "propeller");
        assert_eq!(candidates[1].topology_code, "DDL");
        assert_eq!(candidates[1].reasons[1].code, ReasonCode::LengthDt);
        assert_eq!(candidates[1].reasons[1].argument, "2-2-x");
    }

    #[test]
    fn extra_spaces_are_ignored() {
        let candidates = decode("  A:x/composition:G:0.1   B:y/composition:C:0.2 ");
        assert_eq!(candidates.len(), 2);
        assert!(decode("").is_empty());
        assert!(decode("   ").is_empty());
    }

    #[test]
    fn missing_fields_decode_leniently() {
        let candidates = decode("LLL");
        assert_eq!(candidates[0].topology_code, "LLL");
        assert_eq!(candidates[0].name, "");
        assert!(candidates[0].reasons.is_empty());

        let candidates = decode("LLL:chair/");
        assert!(candidates[0].reasons.is_empty());

        let candidates = decode("LLL:chair/length_match,composition:GC");
        let reasons = &candidates[0].reasons;
        assert_eq!(reasons.len(), 2);
        assert_eq!(reasons[0].argument, "");
        assert_eq!(reasons[0].p_value, None);
        assert_eq!(reasons[1].argument, "GC");
        assert!(!reasons[1].is_complete());
        assert_eq!(reasons[1].to_string(), "composition is GC");
    }

    #[test]
    fn bad_p_value_is_absent() {
        let candidates = decode("A:b/composition:GG:n/a,length_dt:1-2-3:0.5:extra");
        assert_eq!(candidates[0].reasons[0].p_value, None);
        assert_eq!(candidates[0].reasons[1].p_value, Some(0.5));
    }

    #[test]
    fn unknown_code_is_generic() {
        let candidates = decode("A:b/stacking:high:0.2");
        let reason = &candidates[0].reasons[0];
        assert_eq!(reason.code, ReasonCode::Other("stacking".to_string()));
        assert_eq!(reason.to_string(), "stacking is high ( P-value = 0.2 )");
    }
}
