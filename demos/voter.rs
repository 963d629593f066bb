use cadastro::voter::{self, Uf};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=cadastro=debug shows generation events
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let input = "1234 5678 0127";
    match voter::region_of(input) {
        Ok(uf) => println!("{input}: valid, registered in {uf} (code {})", uf.code()),
        Err(e) => println!("{input}: {e}"),
    }

    println!("\nOne registration per UF:");
    for uf in Uf::ALL {
        let doc = voter::generate(Some(uf.as_str())).expect("known UF");
        println!("  {uf}  {doc}");
    }

    println!("\nAny region:");
    let doc = voter::generate(None).expect("generation should succeed");
    println!("  {doc}  ({})", voter::region_of(&doc).expect("generated number is valid"));
}
