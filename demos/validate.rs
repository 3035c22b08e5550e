use vinlib::core::*;

fn main() {
    let vin = Vin::parse("1HGCM82633A004352").unwrap();
    println!("VIN:  {}", vin);
    println!("WMI:  {}", vin.wmi());
    println!("VDS:  {}", vin.vds());
    println!("VIS:  {}", vin.vis());
    println!("Check digit: {}", vin.check_digit());

    // Fill in a missing check digit (position 9 is ignored)
    let draft = "1M8GDM9A0KP042788";
    let check = compute_check_digit(draft).unwrap();
    println!("\nCheck digit for {draft}: {check}");

    // Human input: spaces, hyphens, lowercase
    let typed = " 1hg-cm826-33a004352 ";
    println!("\nStrict parse of {typed:?}: {:?}", Vin::parse(typed).is_ok());
    println!(
        "Lenient parse:  {:?}",
        Vin::parse_lenient(typed).map(|v| v.to_string())
    );
}
