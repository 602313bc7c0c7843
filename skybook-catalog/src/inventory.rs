use skybook_core::flight::Flight;

/// The fixed set of flights available to search. Loaded once at startup;
/// records are immutable afterwards.
pub struct FlightCatalog {
    flights: Vec<Flight>,
}

impl FlightCatalog {
    pub fn new(flights: Vec<Flight>) -> Self {
        Self { flights }
    }

    /// The built-in sample inventory: the CGK → DPS shuttle run.
    pub fn sample() -> Self {
        Self::new(vec![
            sample_flight(
                "1",
                "Garuda Indonesia",
                "https://upload.wikimedia.org/wikipedia/en/9/9f/Garuda_Indonesia_Logo.svg",
                "07:25",
                "09:30",
                "2h 5m",
                1_250_000,
                "GA-401",
            ),
            sample_flight(
                "2",
                "Lion Air",
                "https://upload.wikimedia.org/wikipedia/en/8/8f/Lion_Air_logo.svg",
                "08:45",
                "11:15",
                "2h 30m",
                850_000,
                "JT-504",
            ),
            sample_flight(
                "3",
                "Citilink",
                "https://upload.wikimedia.org/wikipedia/id/9/9f/Citilink_logo.svg",
                "10:15",
                "12:30",
                "2h 15m",
                920_000,
                "QG-679",
            ),
            sample_flight(
                "4",
                "Batik Air",
                "https://upload.wikimedia.org/wikipedia/commons/7/73/Batik_Air.svg",
                "14:05",
                "16:20",
                "2h 15m",
                1_150_000,
                "ID-789",
            ),
            sample_flight(
                "5",
                "AirAsia",
                "https://upload.wikimedia.org/wikipedia/commons/f/f5/AirAsia_New_Logo.svg",
                "16:30",
                "18:45",
                "2h 15m",
                780_000,
                "QZ-123",
            ),
        ])
    }

    pub fn all(&self) -> &[Flight] {
        &self.flights
    }

    pub fn find(&self, id: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.id == id)
    }

    /// Unique airline names, in catalog order. Backs the filter checkboxes.
    pub fn airlines(&self) -> Vec<String> {
        let mut airlines = Vec::new();
        for flight in &self.flights {
            if !airlines.contains(&flight.airline) {
                airlines.push(flight.airline.clone());
            }
        }
        airlines
    }
}

#[allow(clippy::too_many_arguments)]
fn sample_flight(
    id: &str,
    airline: &str,
    logo: &str,
    departure: &str,
    arrival: &str,
    duration: &str,
    price: i64,
    flight_number: &str,
) -> Flight {
    Flight {
        id: id.to_string(),
        airline: airline.to_string(),
        airline_logo: logo.to_string(),
        departure_time: departure.to_string(),
        arrival_time: arrival.to_string(),
        duration: duration.to_string(),
        departure_airport: "CGK".to_string(),
        arrival_airport: "DPS".to_string(),
        price,
        flight_number: flight_number.to_string(),
    }
}
