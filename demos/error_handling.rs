use cadastro::{DocumentError, DocumentKind, cpf, validate_any, voter};

fn describe(input: &str) {
    match validate_any(input) {
        Ok(kind) => println!("{input:>20}  valid {kind}"),
        Err(DocumentError::InvalidLength { found, .. }) => {
            println!("{input:>20}  not a CPF or Título de Eleitor ({found} digits)")
        }
        Err(DocumentError::ChecksumMismatch {
            position,
            expected,
            found,
        }) => println!("{input:>20}  digit {position} should be {expected}, got {found}"),
        Err(DocumentError::UnknownRegion(code)) => {
            println!("{input:>20}  unknown region code {code}")
        }
        Err(e) => println!("{input:>20}  {e}"),
    }
}

fn main() {
    for input in [
        "111.444.777-35",
        "111.444.777-36",
        "1234 5678 0127",
        "1234 5678 9927",
        "12345",
    ] {
        describe(input);
    }

    if let Err(e) = voter::generate(Some("XX")) {
        println!("\ngenerate(XX): {e}");
    }

    for kind in DocumentKind::ALL {
        match kind.generate() {
            Ok(doc) => println!("{kind}: {doc}"),
            Err(e) => println!("{kind}: {e}"),
        }
    }

    let _ = cpf::generate_formatted().map(|doc| println!("formatted CPF: {doc}"));
}
