use anyhow::{Context, Result};
use drawq_core::logging::{init_logging, LoggingConfig};
use drawq_core::{classify, label, parse_label, Category, KeyRange};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print_categories()
    } else {
        print_keys(&args)
    }
}

/// One row per category with its default key and the keys that classify to it.
fn print_categories() -> Result<()> {
    println!("{:<28} {:>6}  {:<16} {}", "CATEGORY", "KEY", "LABEL", "RANGES");
    for category in Category::ALL {
        if category == Category::Unknown {
            continue;
        }
        let key = category
            .default_key()
            .with_context(|| format!("default key for {category:?}"))?;
        let ranges: Vec<String> = category.ranges().iter().copied().map(format_range).collect();
        println!(
            "{:<28} {:>6}  {:<16} {}",
            format!("{category:?}"),
            key,
            label(key),
            ranges.join(", ")
        );
    }
    Ok(())
}

fn format_range(range: KeyRange) -> String {
    if range.is_point() {
        range.lower.to_string()
    } else {
        format!("{}..={}", range.lower, range.upper)
    }
}

fn print_keys(args: &[String]) -> Result<()> {
    for arg in args {
        let key = parse_label(arg).with_context(|| format!("reading {arg:?}"))?;
        let category = classify(key);
        log::debug!("{arg} -> {key} -> {category:?}");
        println!("{:>6}  {:<28} {}", key, format!("{category:?}"), label(key));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_print_as_a_single_key() {
        assert_eq!(format_range(KeyRange::point(2501)), "2501");
        assert_eq!(format_range(KeyRange::new(2900, 3100)), "2900..=3100");
    }

    #[test]
    fn transparent_ray_tracing_lists_legacy_key() {
        let ranges: Vec<String> =
            Category::TransparentRayTracing.ranges().iter().copied().map(format_range).collect();
        assert_eq!(ranges, ["3110", "3900"]);
    }
}
