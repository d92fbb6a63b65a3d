use serde::{Deserialize, Serialize};

/// Employee row as stored in `tb_employee`.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    pub id: i64,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub cpf: Option<String>,
    pub celullar: Option<String>,
    pub office: Option<String>,
    pub sector: Option<String>,
    pub wage: Option<f64>,
}

/// Employee row before the store has assigned an id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEmployeeRecord {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub cpf: Option<String>,
    pub celullar: Option<String>,
    pub office: Option<String>,
    pub sector: Option<String>,
    pub wage: Option<f64>,
}

impl NewEmployeeRecord {
    pub fn with_id(self, id: i64) -> EmployeeRecord {
        EmployeeRecord {
            id,
            name: self.name,
            age: self.age,
            cpf: self.cpf,
            celullar: self.celullar,
            office: self.office,
            sector: self.sector,
            wage: self.wage,
        }
    }
}

/// Employee as exchanged over HTTP. Carries no id.
///
/// Field names match the existing clients: `cpf` is the national id,
/// `celullar` the phone number, `office` the job title and `sector` the
/// department.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EmployeeDto {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub cpf: Option<String>,
    pub celullar: Option<String>,
    pub office: Option<String>,
    pub sector: Option<String>,
    pub wage: Option<f64>,
}

impl From<EmployeeDto> for NewEmployeeRecord {
    fn from(dto: EmployeeDto) -> Self {
        NewEmployeeRecord {
            name: dto.name,
            age: dto.age,
            cpf: dto.cpf,
            celullar: dto.celullar,
            office: dto.office,
            sector: dto.sector,
            wage: dto.wage,
        }
    }
}

impl From<EmployeeRecord> for EmployeeDto {
    fn from(record: EmployeeRecord) -> Self {
        EmployeeDto {
            name: record.name,
            age: record.age,
            cpf: record.cpf,
            celullar: record.celullar,
            office: record.office,
            sector: record.sector,
            wage: record.wage,
        }
    }
}
