use console::Style;
use crate::state::{GenerationRecord, MutantRecord};

pub fn print_error(msg: &str) {
    let style = Style::new().red().bold();
    eprintln!("{} {}", style.apply_to("✗"), msg);
}

pub fn print_success(msg: &str) {
    let style = Style::new().green().bold();
    println!("{} {}", style.apply_to("✓"), msg);
}

pub fn print_generation_result(record: &GenerationRecord) {
    if record.total == 0 && record.skipped == 0 {
        print_success(&format!("{}: no mutable code found", record.file));
        return;
    }

    let style = Style::new().green().bold();
    println!(
        "{} {}: {} mutants generated in {:.1}s",
        style.apply_to("✓"),
        record.file,
        record.total,
        record.duration_ms as f64 / 1000.0,
    );

    let dim = Style::new().dim();
    for (name, count) in &record.by_operator {
        println!("  {} {}: {}", dim.apply_to("·"), name, count);
    }
    if let Some(dir) = &record.out_dir {
        println!("  {} mutant files written to {}", dim.apply_to("·"), dir);
    }

    if record.skipped > 0 {
        let warn = Style::new().yellow().bold();
        println!("  {} {} sites skipped", warn.apply_to("!"), record.skipped);
        for s in &record.skipped_sites {
            println!(
                "    {} {}:{}:{} [{}] {}",
                dim.apply_to("·"),
                record.file,
                s.line,
                s.column,
                s.operator,
                s.reason,
            );
        }
    }

    println!();
    for m in &record.mutants {
        let ref_style = Style::new().cyan().bold();
        let loc_style = Style::new().dim();
        let op_style = Style::new().magenta();

        println!(
            "  {} {}:{} {} {} → {}",
            ref_style.apply_to(format!("@{}", m.ref_id)),
            m.file,
            m.line,
            loc_style.apply_to(format!("[{}]", m.operator)),
            op_style.apply_to(&m.original),
            op_style.apply_to(&m.replacement),
        );
    }
}

pub fn print_mutant_detail(m: &MutantRecord) {
    let ref_style = Style::new().cyan().bold();
    let dim = Style::new().dim();

    println!(
        "{} {}:{} [{}]",
        ref_style.apply_to(format!("@{}", m.ref_id)),
        m.file,
        m.line,
        m.operator,
    );
    println!();

    // Show context with the diff
    for line in &m.context_before {
        println!("  {}", dim.apply_to(line));
    }

    // Show the diff lines
    for line in m.diff.lines() {
        if line.starts_with('-') {
            let del_style = Style::new().red();
            println!("  {}", del_style.apply_to(line));
        } else if line.starts_with('+') {
            let add_style = Style::new().green();
            println!("  {}", add_style.apply_to(line));
        }
    }

    for line in &m.context_after {
        println!("  {}", dim.apply_to(line));
    }

    if let Some(path) = &m.saved_path {
        println!();
        println!("  {}", dim.apply_to(format!("saved: {}", path)));
    }
}

pub fn print_status(record: &GenerationRecord) {
    println!(
        "Last generation: {} mutants from {}, {} sites skipped",
        record.total, record.file, record.skipped,
    );

    if record.total > 0 {
        println!();
        for m in &record.mutants {
            let ref_style = Style::new().cyan().bold();
            println!(
                "  {} {}:{} {} → {}",
                ref_style.apply_to(format!("@{}", m.ref_id)),
                m.file,
                m.line,
                m.original,
                m.replacement,
            );
        }
        println!();
        println!("Use `mutgen show @m1` for details on a specific mutant.");
    }
}
