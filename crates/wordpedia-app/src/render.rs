//! Plain-text rendering of lookup results for the terminal.

use wordpedia_types::{FrequencySeries, RankedTable, RankedTables, WordEntry};

const Y_LABEL_WIDTH: usize = 10;
const COLUMN_GAP: &str = "    ";

pub const BANNER: &str = "\
📘 Wordpedia
Your Ultimate Word Reference Tool
Discover meanings, synonyms, antonyms, and more!

Enter your API key, then type a word to look up its definition, origin,
how often it is used, and its synonyms and antonyms ranked by similarity.
Type :quit to exit.

It might take a few seconds to fetch the data, so please be patient!
";

pub fn render_header(word: &str) -> String {
    format!("Wordpedia of {word}\n")
}

pub fn render_entry(entry: &WordEntry) -> String {
    format!("{}\n", entry.text.trim_end())
}

pub fn render_no_frequency() -> String {
    "No Ngram data found for this word.\n".to_string()
}

/// Filled area chart of the series, `width` columns by `height` rows
pub fn render_chart(series: &FrequencySeries, width: usize, height: usize) -> String {
    let mut out = String::new();
    out.push_str("📈 Usage Frequency (Google Ngram)\n");
    out.push_str(&format!("Ngram usage for '{}'\n", series.word));

    let (Some(first), Some(last), Some(peak)) =
        (series.first_year(), series.last_year(), series.peak())
    else {
        out.push_str(&render_no_frequency());
        return out;
    };

    let columns = bucket_averages(series, width.max(1));
    let height = height.max(1);
    let bars: Vec<usize> = columns
        .iter()
        .map(|value| {
            if peak.frequency > 0.0 {
                ((value / peak.frequency) * height as f64).round() as usize
            } else {
                0
            }
        })
        .collect();

    for row in (1..=height).rev() {
        let label = if row == height {
            format!("{:.2e}", peak.frequency)
        } else {
            String::new()
        };
        let line: String = bars
            .iter()
            .map(|&bar| if bar >= row { '█' } else { ' ' })
            .collect();
        out.push_str(&format!("{label:>Y_LABEL_WIDTH$} |{}\n", line.trim_end()));
    }

    out.push_str(&format!("{:>Y_LABEL_WIDTH$} +{}\n", "0", "-".repeat(bars.len())));

    let first_label = first.to_string();
    let last_label = last.to_string();
    let gap = bars
        .len()
        .saturating_sub(first_label.len() + last_label.len());
    out.push_str(&format!(
        "{:Y_LABEL_WIDTH$}  {}{}{}\n",
        "",
        first_label,
        " ".repeat(gap),
        last_label
    ));
    out.push_str(&format!(
        "Peak: {} ({:.3e})\n",
        peak.year, peak.frequency
    ));

    out
}

/// Average of each of `width` contiguous buckets, fewer if the series is shorter
fn bucket_averages(series: &FrequencySeries, width: usize) -> Vec<f64> {
    let n = series.points.len();
    let columns = width.min(n);

    (0..columns)
        .map(|c| {
            let start = c * n / columns;
            let end = ((c + 1) * n / columns).max(start + 1);
            let bucket = &series.points[start..end];
            bucket.iter().map(|p| p.frequency).sum::<f64>() / bucket.len() as f64
        })
        .collect()
}

/// Synonyms and antonyms side by side
pub fn render_tables(tables: &RankedTables) -> String {
    let left = table_lines("Synonyms", &tables.synonyms);
    let right = table_lines("Antonyms", &tables.antonyms);
    let left_width = left.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = String::from("🔄 Synonyms and Antonyms\n");
    for i in 0..left.len().max(right.len()) {
        let l = left.get(i).map(String::as_str).unwrap_or("");
        let r = right.get(i).map(String::as_str).unwrap_or("");
        let pad = left_width - l.chars().count();
        let line = format!("{l}{}{COLUMN_GAP}{r}", " ".repeat(pad));
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn table_lines(title: &str, table: &RankedTable) -> Vec<String> {
    let word_width = table
        .iter()
        .map(|e| e.word.chars().count())
        .max()
        .unwrap_or(0)
        .max("Word".len());
    let index_width = table.len().saturating_sub(1).to_string().len();

    let mut lines = vec![
        title.to_string(),
        format!("{:index_width$}  {:<word_width$}  {:>10}", "", "Word", "Similarity"),
    ];

    if table.is_empty() {
        lines.push("(none)".to_string());
        return lines;
    }

    for (i, entry) in table.iter().enumerate() {
        lines.push(format!(
            "{:>index_width$}  {:<word_width$}  {:>10.4}",
            i, entry.word, entry.similarity
        ));
    }
    lines
}
