// The live guests table carries further RSVP-state columns (acceptance,
// dietary restrictions, timestamps); only the columns the admin tools touch
// are declared here.

diesel::table! {
    guests (id) {
        #[max_length = 12]
        id -> Varchar,
        #[max_length = 100]
        guest_name -> Varchar,
        plus_one_allowed -> Bool,
        #[max_length = 100]
        plus_one_name -> Nullable<Varchar>,
    }
}
