use cadastro::cpf;

fn main() {
    let input = "111.444.777-35";
    match cpf::validate(input) {
        Ok(()) => println!("{input}: valid"),
        Err(e) => println!("{input}: {e}"),
    }

    let tampered = "111.444.777-36";
    if let Err(e) = cpf::validate(tampered) {
        println!("{tampered}: {e}");
    }

    println!("\nGenerated CPFs:");
    for _ in 0..5 {
        let doc = cpf::generate().expect("generation should succeed");
        let formatted = cpf::format(&doc).expect("generated CPF should be valid");
        println!("  {doc}  {formatted}");
    }
}
