//! Accordion view model — the panel list the results screen renders.

use serde::Serialize;

use crate::report::orchestrator::ReportSnapshot;

/// One expandable panel, keyed by its position in the report.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccordionPanel {
    /// A resolved career suggestion.
    Suggestion {
        key: usize,
        job: String,
        description: String,
        justification: String,
        training: String,
        /// Pre-joined for the panel body, matching the rendered
        /// "Org A, Org B, " line.
        organizations: String,
    },
    /// A slot still awaiting a suggestion.
    Pending { key: usize },
}

/// Builds one panel per resolved suggestion followed by one placeholder per
/// pending slot. Placeholders disappear once the session is done.
pub fn build_panels(snapshot: &ReportSnapshot) -> Vec<AccordionPanel> {
    let mut panels = Vec::with_capacity(snapshot.suggestions.len() + snapshot.pending());

    for (key, suggestion) in snapshot.suggestions.iter().enumerate() {
        let organizations = suggestion
            .orgs
            .iter()
            .fold(String::new(), |acc, org| acc + org + ", ");
        panels.push(AccordionPanel::Suggestion {
            key,
            job: suggestion.job.clone(),
            description: suggestion.description.clone(),
            justification: suggestion.justification.clone(),
            training: suggestion.training.clone(),
            organizations,
        });
    }

    let resolved = snapshot.suggestions.len();
    for offset in 0..snapshot.pending() {
        panels.push(AccordionPanel::Pending {
            key: resolved + offset,
        });
    }

    panels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::suggestion::CareerSuggestion;

    fn suggestion(job: &str) -> CareerSuggestion {
        CareerSuggestion {
            job: job.to_string(),
            description: "desc".to_string(),
            justification: "just".to_string(),
            training: "train".to_string(),
            orgs: vec!["Org A".to_string(), "Org B".to_string()],
        }
    }

    fn snapshot(resolved: usize, target: usize, done: bool) -> ReportSnapshot {
        let mut s = ReportSnapshot::new(target);
        s.suggestions = (0..resolved).map(|i| suggestion(&format!("Job {i}"))).collect();
        s.loading = false;
        s.done = done;
        s
    }

    #[test]
    fn test_panels_mix_suggestions_and_placeholders() {
        let panels = build_panels(&snapshot(3, 10, false));
        assert_eq!(panels.len(), 10);
        assert!(matches!(panels[2], AccordionPanel::Suggestion { key: 2, .. }));
        assert!(matches!(panels[3], AccordionPanel::Pending { key: 3 }));
        assert!(matches!(panels[9], AccordionPanel::Pending { key: 9 }));
    }

    #[test]
    fn test_done_report_has_no_placeholders() {
        // A short report: two cycles failed, so the done session has 8 panels.
        let panels = build_panels(&snapshot(8, 10, true));
        assert_eq!(panels.len(), 8);
        assert!(panels
            .iter()
            .all(|p| matches!(p, AccordionPanel::Suggestion { .. })));
    }

    #[test]
    fn test_organizations_line_is_comma_joined() {
        let panels = build_panels(&snapshot(1, 1, true));
        match &panels[0] {
            AccordionPanel::Suggestion { organizations, .. } => {
                assert_eq!(organizations, "Org A, Org B, ");
            }
            other => panic!("expected suggestion panel, got {other:?}"),
        }
    }

    #[test]
    fn test_panel_serializes_with_kind_tag() {
        let panels = build_panels(&snapshot(0, 1, false));
        let json = serde_json::to_value(&panels[0]).unwrap();
        assert_eq!(json["kind"], "pending");
        assert_eq!(json["key"], 0);
    }
}
