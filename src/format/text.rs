//! Human-readable text output formatter

use crate::candidate::{Candidate, CandidateKind};
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::view::{DisplayRecord, RankReport};
use std::fmt::Write;

/// Text formatter - one line per record
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable list"
    }

    fn format(&self, report: &RankReport) -> Result<String> {
        let mut output = String::new();

        let heading = match report.kind {
            CandidateKind::Free => "free parking hotspots",
            CandidateKind::Paid => "paid parking listings",
        };
        // Writing to a String cannot fail
        let _ = writeln!(output, "park-radar {} ({})", heading, report.id);

        match report.reference {
            Some(reference) => {
                let _ = writeln!(output, "Reference: {}", reference);
                let _ = writeln!(
                    output,
                    "Showing {} of {} candidates (limit {})",
                    report.records.len(),
                    report.total_candidates,
                    report.limit
                );
            }
            None => {
                let _ = writeln!(output, "Reference: none (unranked)");
                let _ = writeln!(output, "Showing {} candidates", report.records.len());
            }
        }
        output.push('\n');

        if report.records.is_empty() {
            output.push_str("  No parking found\n");
        }

        for (i, record) in report.records.iter().enumerate() {
            let _ = writeln!(output, "{:>3}. {}", i + 1, format_record(record));
        }

        Ok(output)
    }
}

fn format_record(record: &DisplayRecord) -> String {
    let mut line = match &record.candidate {
        Candidate::FreeHotspot(h) => format!(
            "[{}] {}  {}  radius {:.0}m",
            record.color,
            h.label,
            record.badge,
            record.radius_meters.unwrap_or_default()
        ),
        Candidate::PaidListing(p) => {
            let name = if p.name.is_empty() { &p.id } else { &p.name };
            format!(
                "[{}] {}  {}  {}  {}/hr  rating {:.1}",
                record.color, name, record.label, record.badge, p.price_per_hour, p.rating
            )
        }
    };

    if let Some(distance) = &record.distance_text {
        line.push_str("  ");
        line.push_str(distance);
    }

    line
}
