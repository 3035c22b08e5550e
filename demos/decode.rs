use chrono::Local;
use vinlib::core::Vin;
use vinlib::decode::describe;

fn main() {
    let today = Local::now().date_naive();
    for raw in [
        "1HGCM82633A004352",
        "5YJSA1E18HF000001",
        "WBA3A5C57CF256651",
        "SA9ABC1295A123456",
    ] {
        match Vin::parse(raw) {
            Ok(vin) => println!("{}\n", describe(&vin, today)),
            Err(e) => println!("{raw}: {e}\n"),
        }
    }
}
