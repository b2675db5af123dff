//! Run the identifier rules over text given on the command line or stdin.
//!
//! ```text
//! echo "Cliente 12345678Z, NIE X1234567L" | cargo run --example find_in_text
//! ```

use busqueitor::{find_identifiers, RULES};
use std::io::Read;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = if args.is_empty() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        args.join(" ")
    };

    println!("Rules:");
    for rule in RULES {
        println!("  {:<8} {}", rule.kind.label(), rule.pattern.as_str());
    }

    let hits = find_identifiers(&text);
    if hits.is_empty() {
        println!("No identifiers found.");
    }
    for m in hits {
        println!("{:>6}  {:<8} {}", m.offset, m.kind.label(), m.value);
    }
    Ok(())
}
