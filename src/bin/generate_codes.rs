use rsvp_admin::codes;

fn main() {
    let batch = codes::generate_batch(&mut rand::thread_rng());
    for code in &batch {
        println!("{code}");
    }
}
