//! Static description of the four clinic tables. Everything that ends up
//! interpolated into SQL (table names, column names, DDL) comes from this
//! registry, so the generic handlers never splice free text into a statement.

use std::fmt;

/// One user-editable column of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Column name in the table.
    pub name: &'static str,
    /// Label shown next to the input. The trailing `*` marks it required.
    pub label: &'static str,
    /// Hint rendered while the input is still empty.
    pub placeholder: &'static str,
}

impl FieldSpec {
    /// Label without the required marker, used in validation messages.
    pub fn plain_label(&self) -> &'static str {
        self.label.trim_end_matches('*')
    }
}

/// Everything the handlers need to know about one table.
#[derive(Debug)]
pub struct TableSpec {
    pub table: &'static str,
    pub primary_key: &'static str,
    /// Insertable fields in declaration order. The primary key is not listed
    /// because the store assigns it.
    pub fields: &'static [FieldSpec],
    pub form_title: &'static str,
    pub form_description: &'static str,
    pub created_message: &'static str,
    pub create_sql: &'static str,
}

/// The closed set of record types the clinic manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    Pet,
    Owner,
    Appointment,
    Service,
}

impl RecordType {
    /// Navigation order, which is also the table creation order.
    pub const ALL: [RecordType; 4] = [
        RecordType::Pet,
        RecordType::Owner,
        RecordType::Appointment,
        RecordType::Service,
    ];

    pub fn spec(self) -> &'static TableSpec {
        match self {
            RecordType::Pet => &PETS,
            RecordType::Owner => &OWNERS,
            RecordType::Appointment => &APPOINTMENTS,
            RecordType::Service => &SERVICES,
        }
    }

    pub fn table_name(self) -> &'static str {
        self.spec().table
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        self.spec().fields
    }

    /// Plural heading used by table views.
    pub fn plural(self) -> &'static str {
        match self {
            RecordType::Pet => "Pets",
            RecordType::Owner => "Owners",
            RecordType::Appointment => "Appointments",
            RecordType::Service => "Services",
        }
    }

    /// Build the `INSERT` for this record type with one positional parameter
    /// per declared field.
    pub fn insert_statement(self) -> String {
        let fields = self.fields();
        let columns = fields
            .iter()
            .map(|field| field.name)
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=fields.len())
            .map(|idx| format!("?{idx}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} ({columns}) VALUES ({placeholders})",
            self.table_name()
        )
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordType::Pet => "Pet",
            RecordType::Owner => "Owner",
            RecordType::Appointment => "Appointment",
            RecordType::Service => "Service",
        };
        f.write_str(name)
    }
}

static PETS: TableSpec = TableSpec {
    table: "pets",
    primary_key: "id",
    fields: &[
        FieldSpec {
            name: "name",
            label: "Name*",
            placeholder: "Enter the pet's name",
        },
        FieldSpec {
            name: "age",
            label: "Age*",
            placeholder: "Enter the pet's age",
        },
        FieldSpec {
            name: "species",
            label: "Species*",
            placeholder: "Enter the pet's species",
        },
        FieldSpec {
            name: "breed",
            label: "Breed*",
            placeholder: "Enter the pet's breed",
        },
        FieldSpec {
            name: "owner_id",
            label: "Owner ID*",
            placeholder: "Enter the pet's owner ID",
        },
    ],
    form_title: "Add a New Pet",
    form_description: "Please fill out the form below to add a new pet to the system.",
    created_message: "Pet added successfully!",
    create_sql: "CREATE TABLE IF NOT EXISTS pets(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            age INTEGER NOT NULL,
            species TEXT NOT NULL,
            breed TEXT NOT NULL,
            owner_id INTEGER NOT NULL,
            FOREIGN KEY(owner_id) REFERENCES owners(id)
                ON UPDATE CASCADE
                ON DELETE CASCADE
        )",
};

static OWNERS: TableSpec = TableSpec {
    table: "owners",
    primary_key: "id",
    fields: &[
        FieldSpec {
            name: "name",
            label: "Name*",
            placeholder: "Enter the owner's name",
        },
        FieldSpec {
            name: "contact",
            label: "Contact*",
            placeholder: "Enter the owner's contact number",
        },
        FieldSpec {
            name: "email",
            label: "Email*",
            placeholder: "Enter the owner's email",
        },
        FieldSpec {
            name: "address",
            label: "Address*",
            placeholder: "Enter the owner's address",
        },
    ],
    form_title: "Add a New Owner",
    form_description: "Please fill out the form below to add a new owner to the system.",
    created_message: "Owner added successfully!",
    create_sql: "CREATE TABLE IF NOT EXISTS owners(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            contact TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            address TEXT NOT NULL
        )",
};

// Neither foreign key declares an ON DELETE action.
static APPOINTMENTS: TableSpec = TableSpec {
    table: "appointments",
    primary_key: "id",
    fields: &[
        FieldSpec {
            name: "date",
            label: "Date*",
            placeholder: "Enter the appointment date",
        },
        FieldSpec {
            name: "time",
            label: "Time*",
            placeholder: "Enter the appointment time",
        },
        FieldSpec {
            name: "pet_id",
            label: "Pet ID*",
            placeholder: "Enter the pet's ID",
        },
        FieldSpec {
            name: "service_id",
            label: "Service ID*",
            placeholder: "Enter the service ID",
        },
    ],
    form_title: "Schedule an Appointment",
    form_description: "Please fill out the form below to schedule an appointment.",
    created_message: "Appointment scheduled successfully!",
    create_sql: "CREATE TABLE IF NOT EXISTS appointments(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            time TEXT NOT NULL,
            pet_id INTEGER NOT NULL,
            service_id INTEGER NOT NULL,
            FOREIGN KEY(pet_id) REFERENCES pets(id)
            FOREIGN KEY(service_id) REFERENCES services(id)
        )",
};

static SERVICES: TableSpec = TableSpec {
    table: "services",
    primary_key: "id",
    fields: &[
        FieldSpec {
            name: "service_name",
            label: "Service*",
            placeholder: "Enter the service name",
        },
        FieldSpec {
            name: "cost",
            label: "Cost*",
            placeholder: "Enter the service cost",
        },
    ],
    form_title: "Add a New Service",
    form_description: "Please fill out the form below to add a new service to the system.",
    created_message: "Service added successfully!",
    create_sql: "CREATE TABLE IF NOT EXISTS services(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            service_name TEXT NOT NULL,
            cost REAL NOT NULL
        )",
};
