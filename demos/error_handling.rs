use vinlib::core::*;

fn main() {
    // ── 1. Each check, in the order it runs ───────────────────────────
    println!("=== Rejections ===");
    for raw in [
        "",
        "1HGCM82633A00435",
        "1HGCM82I33A004352",
        "1HGCM826Y3A004352",
        "1HGCM82623A004352",
    ] {
        match validate(raw) {
            Ok(()) => println!("  {raw:<18} valid"),
            Err(e) => println!("  {raw:<18} [{}] {}", e.kind(), e),
        }
    }

    // ── 2. Branching on the error for user-facing hints ───────────────
    println!("\n=== Hints ===");
    let input = "1HGCM82623A004352";
    match Vin::parse(input) {
        Ok(vin) => println!("  {vin} is valid"),
        Err(VinError::InvalidLength { length }) => {
            println!("  A VIN has 17 characters, you entered {length}")
        }
        Err(VinError::IllegalCharacter {
            character,
            position,
        }) => {
            println!("  {character:?} at position {position} never appears in a VIN")
        }
        Err(VinError::IllegalChecksumCharacter { character }) => {
            println!("  Position 9 must be a digit or X, not {character:?}")
        }
        Err(VinError::InvalidChecksum { expected, found }) => {
            println!("  Typo? Position 9 reads {found}, the checksum calls for {expected}")
        }
    }

    // ── 3. Lowercase is rejected unless normalized explicitly ─────────
    println!("\n=== Case ===");
    let lower = "1hgcm82633a004352";
    match Vin::parse(lower) {
        Ok(_) => println!("  Parsed successfully (unexpected)"),
        Err(e) => println!("  Strict: {e}"),
    }
    match Vin::parse_lenient(lower) {
        Ok(vin) => println!("  Lenient: {vin}"),
        Err(e) => println!("  Lenient: {e}"),
    }
}
