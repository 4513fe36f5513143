//! Table definition and SQL statements for the reservations store.

/// SQL statement to create the reservations table.
///
/// Column order is part of the on-disk contract: id, name, `flight_number`,
/// departure, destination, date, `seat_number`. `AUTOINCREMENT` keeps
/// identifiers of deleted rows from being handed out again.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        flight_number TEXT NOT NULL,
        departure TEXT NOT NULL,
        destination TEXT NOT NULL,
        date TEXT NOT NULL,
        seat_number TEXT NOT NULL
    )";

/// Reads the header of the database file, failing if it is not a database.
pub const PROBE_SCHEMA: &str = "PRAGMA schema_version";

pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations (name, flight_number, departure, destination, date, seat_number)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
";

pub const SELECT_ALL: &str = r"
    SELECT id, name, flight_number, departure, destination, date, seat_number
    FROM reservations
    ORDER BY id
";

pub const SELECT_BY_ID: &str = r"
    SELECT id, name, flight_number, departure, destination, date, seat_number
    FROM reservations
    WHERE id = ?1
";

pub const UPDATE_RESERVATION: &str = r"
    UPDATE reservations
    SET name = ?1, flight_number = ?2, departure = ?3, destination = ?4, date = ?5, seat_number = ?6
    WHERE id = ?7
";

pub const DELETE_RESERVATION: &str = "DELETE FROM reservations WHERE id = ?1";

/// Substring match over the four searchable columns.
///
/// The bound term is wrapped in `%` wildcards, so an empty term matches
/// every row.
pub const SEARCH_RESERVATIONS: &str = r"
    SELECT id, name, flight_number, departure, destination, date, seat_number
    FROM reservations
    WHERE name LIKE '%' || ?1 || '%'
       OR flight_number LIKE '%' || ?1 || '%'
       OR departure LIKE '%' || ?1 || '%'
       OR destination LIKE '%' || ?1 || '%'
    ORDER BY id
";
