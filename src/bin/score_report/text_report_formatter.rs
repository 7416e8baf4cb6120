use std::fmt::Write;

use pronounce_rs::Report;

pub fn render(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "score report (schema v{}) generated {}",
        report.schema_version, report.meta.generated_at
    );
    let _ = writeln!(out, "{} case(s)", report.meta.case_count);
    let _ = writeln!(out);

    for case in &report.cases {
        let _ = writeln!(
            out,
            "{}: {:.1}% ({} word(s), {} omitted)",
            case.id, case.pronunciation_accuracy, case.word_count, case.omitted_word_count
        );
        let _ = writeln!(out, "  reference: {}", case.reference);
        let _ = writeln!(out, "  matched:   {}", case.matched);
        let _ = writeln!(out, "  category:  {}", case.pair_accuracy_category);
    }

    let counts = &report.aggregates.category_counts;
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "words: {} excellent, {} good, {} fair, {} poor",
        counts.excellent, counts.good, counts.fair, counts.poor
    );
    if let Some(accuracy) = &report.aggregates.accuracy {
        let _ = writeln!(
            out,
            "accuracy: mean {:.1} p50 {:.1} p90 {:.1} min {:.1} max {:.1}",
            accuracy.mean, accuracy.p50, accuracy.p90, accuracy.min, accuracy.max
        );
    }
    out
}
