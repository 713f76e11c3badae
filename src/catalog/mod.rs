//! Static report catalog.
//!
//! Menu numbers are 1-based and follow catalog order, so the rendered menu
//! and the lookup stay in lock-step by construction. Query parameters are
//! positional (`$1`, `$2`, ...); integer parameters carry an explicit
//! `::BIGINT` cast so the bound value type never depends on column inference.

use crate::error::CatalogError;

/// The shape of one value the operator must supply before execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Free-form non-empty text; `uppercase` normalizes codes such as ICAO
    /// identifiers before binding.
    Text { uppercase: bool },
    Int,
}

#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub prompt: &'static str,
    pub kind: ParamKind,
}

/// A collected parameter value, ready to bind.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
}

/// One entry of a secondary selection menu.
#[derive(Debug, Clone, Copy)]
pub struct SubChoice {
    pub label: &'static str,
    pub sql: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub enum ReportKind {
    /// A single statement, executed prepared with bound parameters (or
    /// directly when `params` is empty).
    Query {
        sql: &'static str,
        params: &'static [ParamSpec],
    },
    /// A secondary menu where each choice is its own complete statement.
    SubSelect {
        heading: &'static str,
        prompt: &'static str,
        choices: &'static [SubChoice],
    },
    /// A full-table dump over a closed, allow-listed identifier set.
    TableDump {
        heading: &'static str,
        prompt: &'static str,
        tables: &'static [&'static str],
    },
    /// Batch execution of the rebuild script; bypasses the browse loop.
    Rebuild,
}

#[derive(Debug, Clone, Copy)]
pub struct ReportDef {
    pub label: &'static str,
    pub kind: ReportKind,
}

/// Resolve a 1-based menu selection. Unreachable through the menu prompt,
/// which bounds its input to the catalog length.
pub fn lookup(selection: usize) -> Result<&'static ReportDef, CatalogError> {
    if selection >= 1 && selection <= REPORTS.len() {
        Ok(&REPORTS[selection - 1])
    } else {
        Err(CatalogError::UnknownSelection { selection })
    }
}

/// Build the dump statement for an allow-listed table identifier. The
/// identifier must come from a `ReportKind::TableDump` list; operator text
/// never reaches this function.
pub fn dump_statement(table: &str) -> String {
    format!("SELECT * FROM {}", table)
}

pub const REPORTS: &[ReportDef] = &[
    ReportDef {
        label: "Track pilot's journey in a day",
        kind: ReportKind::Query {
            sql: "SELECT Flights.flightNum, Flights.origin, Flights.schedDep, Flights.destination, Flights.schedArr \
                  FROM Fly \
                  JOIN Flights ON Fly.flightNum = Flights.flightNum \
                  WHERE Fly.SIN = $1::BIGINT \
                  ORDER BY Flights.schedDep ASC",
            params: &[ParamSpec {
                prompt: "Enter pilot SIN",
                kind: ParamKind::Int,
            }],
        },
    },
    ReportDef {
        label: "Passengers on layover",
        kind: ReportKind::Query {
            sql: "WITH arrivingPassengers AS ( \
                      SELECT Passenger.passNum, Flights.flightNum, Flights.schedArr FROM Passenger \
                      JOIN Book ON Passenger.passNum = Book.passNum \
                      JOIN Flights ON Book.flightNum = Flights.flightNum \
                      JOIN Airports ON Flights.destination = Airports.icao \
                      WHERE Airports.icao = $1 \
                  ) \
                  SELECT COUNT(*) AS noOfPassengersOnLayover FROM arrivingPassengers \
                  WHERE EXISTS ( \
                      SELECT 1 FROM Flights \
                      JOIN Book ON Flights.flightNum = Book.flightNum \
                      JOIN Passenger ON Book.passNum = Passenger.passNum \
                      WHERE Flights.schedDep > arrivingPassengers.schedArr \
                        AND Passenger.passNum = arrivingPassengers.passNum \
                  )",
            params: &[ParamSpec {
                prompt: "Enter airport ICAO code",
                kind: ParamKind::Text { uppercase: true },
            }],
        },
    },
    ReportDef {
        label: "Most productive employees",
        kind: ReportKind::Query {
            sql: "SELECT Employee.SIN, Employee.first, Employee.last, COUNT(*) AS jobsCompleted \
                  FROM Employee \
                  JOIN ( \
                      SELECT Service.SIN FROM Service \
                      UNION ALL \
                      SELECT Guide.SIN FROM Guide \
                      UNION ALL \
                      SELECT Fly.SIN FROM Fly \
                  ) jobs ON Employee.SIN = jobs.SIN \
                  GROUP BY Employee.SIN, Employee.first, Employee.last \
                  ORDER BY COUNT(*) DESC, Employee.last ASC",
            params: &[],
        },
    },
    ReportDef {
        label: "Most popular airlines",
        kind: ReportKind::Query {
            sql: "SELECT Book.airline, COUNT(*) AS bookings FROM Book \
                  GROUP BY Book.airline \
                  ORDER BY bookings DESC \
                  LIMIT 10",
            params: &[],
        },
    },
    ReportDef {
        label: "Passengers flying home",
        kind: ReportKind::Query {
            sql: "SELECT COUNT(*) AS numPassengersFlyingHome, Passenger.citizen AS country FROM Passenger \
                  JOIN Book ON Passenger.passNum = Book.passNum \
                  JOIN Flights ON Book.flightNum = Flights.flightNum \
                  JOIN Airports ON Flights.destination = Airports.icao \
                  WHERE Airports.country = Passenger.citizen \
                  GROUP BY Passenger.citizen \
                  ORDER BY numPassengersFlyingHome DESC",
            params: &[],
        },
    },
    ReportDef {
        label: "Top plane models requiring servicing",
        kind: ReportKind::Query {
            sql: "SELECT Planes.manufacturer, Planes.model, COUNT(*) AS numberOfServices FROM Service \
                  JOIN Planes ON Service.tailNum = Planes.tailNum \
                  WHERE Planes.model IS NOT NULL \
                  GROUP BY Planes.manufacturer, Planes.model \
                  ORDER BY numberOfServices DESC",
            params: &[],
        },
    },
    ReportDef {
        label: "All flights departing from airport",
        kind: ReportKind::Query {
            sql: "SELECT Flights.flightNum, Flights.origin, Flights.destination, Airlines.airlineName \
                  FROM Flights \
                  JOIN Airports ON Flights.origin = Airports.icao \
                  JOIN Planes ON Flights.tailNum = Planes.tailNum \
                  JOIN Airlines ON Airlines.airlineName = Planes.airline \
                  WHERE Flights.origin = $1 \
                  ORDER BY Airlines.airlineName, Flights.flightNum ASC",
            params: &[ParamSpec {
                prompt: "Enter airport ICAO code",
                kind: ParamKind::Text { uppercase: true },
            }],
        },
    },
    ReportDef {
        label: "All luggage owned by passenger",
        kind: ReportKind::Query {
            sql: "SELECT Luggage.ID, Luggage.type FROM Passenger \
                  JOIN Luggage ON Passenger.passNum = Luggage.passNum \
                  WHERE Passenger.phoneNum = $1 \
                  ORDER BY Luggage.ID ASC",
            params: &[ParamSpec {
                prompt: "Enter passenger phone number (with hyphens)",
                kind: ParamKind::Text { uppercase: false },
            }],
        },
    },
    ReportDef {
        label: "All flights by an airline",
        kind: ReportKind::Query {
            sql: "SELECT Flights.* FROM Airlines \
                  JOIN Planes ON Airlines.airlineName = Planes.airline \
                  JOIN Flights ON Planes.tailNum = Flights.tailNum \
                  WHERE Airlines.airlineName = $1",
            params: &[ParamSpec {
                prompt: "Enter airline name",
                kind: ParamKind::Text { uppercase: true },
            }],
        },
    },
    ReportDef {
        label: "Most common destination airport based on origin airport",
        kind: ReportKind::Query {
            sql: "SELECT Flights.destination AS airportCode, Airports.airportName, COUNT(*) AS numberOfFlights \
                  FROM Flights \
                  JOIN Airports ON Flights.destination = Airports.icao \
                  WHERE Flights.origin = $1 \
                  GROUP BY Flights.destination, Airports.airportName \
                  ORDER BY numberOfFlights DESC",
            params: &[ParamSpec {
                prompt: "Enter origin airport ICAO code",
                kind: ParamKind::Text { uppercase: true },
            }],
        },
    },
    ReportDef {
        label: "Average age of aircraft in airline fleet",
        kind: ReportKind::Query {
            sql: "SELECT Airlines.airlineName, to_char(AVG(2025 - 1.0 * Planes.year), 'FM999990.00') AS averageAge \
                  FROM Planes \
                  JOIN Airlines ON Planes.airline = Airlines.airlineName \
                  GROUP BY Airlines.airlineName \
                  HAVING AVG(2025 - Planes.year) IS NOT NULL \
                  ORDER BY AVG(2025 - Planes.year) DESC",
            params: &[],
        },
    },
    ReportDef {
        label: "Average number of bags per passenger on flight",
        kind: ReportKind::Query {
            sql: "SELECT to_char(AVG(numBags), 'FM999990.00') AS avgBagsPerPassenger FROM ( \
                      SELECT Passenger.passNum, COUNT(*) AS numBags FROM Luggage \
                      JOIN Passenger ON Luggage.passNum = Passenger.passNum \
                      JOIN Book ON Passenger.passNum = Book.passNum \
                      WHERE Book.flightNum = $1 \
                      GROUP BY Passenger.passNum \
                  ) perPassenger \
                  HAVING AVG(numBags) IS NOT NULL",
            params: &[ParamSpec {
                prompt: "Enter flight number",
                kind: ParamKind::Text { uppercase: true },
            }],
        },
    },
    ReportDef {
        label: "Employee's completed jobs",
        kind: ReportKind::Query {
            sql: "WITH completedJobs AS ( \
                      SELECT 'Service' AS jobType, Service.SIN, Service.tailNum AS tailOrFlightNumber FROM Service \
                      UNION ALL \
                      SELECT 'Guide' AS jobType, Guide.SIN, Guide.tailNum AS tailOrFlightNumber FROM Guide \
                      UNION ALL \
                      SELECT 'Fly' AS jobType, Fly.SIN, Fly.flightNum AS tailOrFlightNumber FROM Fly \
                  ) \
                  SELECT jobType, tailOrFlightNumber FROM completedJobs WHERE completedJobs.SIN = $1::BIGINT",
            params: &[ParamSpec {
                prompt: "Enter employee SIN",
                kind: ParamKind::Int,
            }],
        },
    },
    ReportDef {
        label: "List all or some employees",
        kind: ReportKind::SubSelect {
            heading: "Select the type of employee to list.",
            prompt: "Enter selection (1-4)",
            choices: &[
                SubChoice {
                    label: "Pilots",
                    sql: "SELECT Employee.SIN, Employee.first, Employee.last, Employee.airline FROM Employee \
                          JOIN Fly ON Employee.SIN = Fly.SIN \
                          ORDER BY Employee.last, Employee.first, Employee.SIN ASC",
                },
                SubChoice {
                    label: "Maintenance staff",
                    sql: "SELECT Employee.SIN, Employee.first, Employee.last, Employee.icao AS airport FROM Employee \
                          JOIN Service ON Employee.SIN = Service.SIN \
                          ORDER BY Employee.last, Employee.first, Employee.SIN ASC",
                },
                SubChoice {
                    label: "Air Traffic Controllers",
                    sql: "SELECT Employee.SIN, Employee.first, Employee.last, Employee.icao AS airport FROM Employee \
                          JOIN Guide ON Employee.SIN = Guide.SIN \
                          ORDER BY Employee.last, Employee.first, Employee.SIN ASC",
                },
                SubChoice {
                    label: "All employees",
                    sql: "WITH allEmployees AS ( \
                              SELECT 'Pilot' AS type, Employee.first, Employee.last, Employee.SIN FROM Employee \
                              JOIN Fly ON Employee.SIN = Fly.SIN \
                              UNION ALL \
                              SELECT 'Maintenance' AS type, Employee.first, Employee.last, Employee.SIN FROM Employee \
                              JOIN Service ON Employee.SIN = Service.SIN \
                              UNION ALL \
                              SELECT 'ATC' AS type, Employee.first, Employee.last, Employee.SIN FROM Employee \
                              JOIN Guide ON Employee.SIN = Guide.SIN \
                          ) \
                          SELECT DISTINCT allEmployees.last, allEmployees.first, allEmployees.SIN FROM allEmployees \
                          ORDER BY allEmployees.last, allEmployees.first, allEmployees.SIN ASC",
                },
            ],
        },
    },
    ReportDef {
        label: "Average flight length from origin and destination",
        kind: ReportKind::Query {
            sql: "SELECT to_char(AVG(EXTRACT(EPOCH FROM (Flights.schedArr - Flights.schedDep)) / 60.0), 'FM999990.00') AS \"avgFlightTime (mins)\" \
                  FROM Flights \
                  WHERE Flights.origin = $1 AND Flights.destination = $2",
            params: &[
                ParamSpec {
                    prompt: "Enter origin airport ICAO code",
                    kind: ParamKind::Text { uppercase: true },
                },
                ParamSpec {
                    prompt: "Enter destination airport ICAO code",
                    kind: ParamKind::Text { uppercase: true },
                },
            ],
        },
    },
    ReportDef {
        label: "Raw table information",
        kind: ReportKind::TableDump {
            heading: "Select a table to dump.",
            prompt: "Enter selection (1-14)",
            tables: &[
                "Airlines",
                "Airports",
                "Attend",
                "Book",
                "CreditCards",
                "Employee",
                "Flights",
                "Fly",
                "Guide",
                "Luggage",
                "Passenger",
                "Planes",
                "Runways",
                "Service",
            ],
        },
    },
    ReportDef {
        label: "Rebuild database",
        kind: ReportKind::Rebuild,
    },
];

pub const HELP_TEXT: &str = "\
\t[ 1] Track pilot's journey in a day
\t\tParameter: Pilot SIN
\t\tReturns all flights that a pilot operated during the day.

\t[ 2] Passengers on layover
\t\tParameter: Airport ICAO code
\t\tReturns the number of passengers laid over at this airport (i.e. arrived and immediately departed).

\t[ 3] Most productive employees
\t\tNo parameters
\t\tReturns all employees who completed the most jobs, of any type.

\t[ 4] Most popular airlines
\t\tNo parameters
\t\tReturns the top 10 airlines with the most bookings.

\t[ 5] Passengers flying home
\t\tNo parameters
\t\tReturns the amount of passengers flying to their country of citizenship, grouped by country.

\t[ 6] Top plane models requiring servicing
\t\tNo parameters
\t\tReturns the aircraft models that have the most service records.

\t[ 7] All flights departing from airport
\t\tParameter: Airport ICAO code
\t\tReturns all flights that departed from the input airport.

\t[ 8] All luggage owned by passenger
\t\tParameter: Passenger phone number
\t\tReturns all pieces of luggage owned by a passenger.

\t[ 9] All flights by an airline
\t\tParameter: Airline name
\t\tReturns all flights operated by a specific airline.

\t[10] Most common destination airport based on origin airport
\t\tParameter: Origin airport ICAO code
\t\tReturns the most common destination airports given an origin airport.

\t[11] Average age of aircraft in airline fleet
\t\tNo parameters
\t\tReturns the average age of all aircraft in airline's fleets, grouped by airline.

\t[12] Average number of bags per passenger on flight
\t\tParameter: Flight number
\t\tReturns the average number of bags per passenger on a given flight.

\t[13] Employee's completed jobs
\t\tParameter: Employee SIN
\t\tReturns all jobs completed by an employee.

\t[14] List all or some employees
\t\tSubqueries: Select type of employee, or all
\t\tReturns all employees of a given type, or all employees.

\t[15] Average flight length from origin and destination
\t\tParameter: Origin airport ICAO code
\t\tParameter: Destination airport ICAO code
\t\tReturns the average duration of all flights from the origin airport to the destination airport.

\t[16] Raw table information
\t\tSubqueries: Choose an individual table
\t\tReturns an entire table, based on selection.

\t[17] Rebuild database
\t\tNo parameters
\t\tRebuilds the entire database server-side. Will ask for confirmation.
";
