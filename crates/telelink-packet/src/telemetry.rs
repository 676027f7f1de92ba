//! Sensor telemetry sent down from the instrument.
//!
//! Field layout (135 payload bytes):
//! ```text
//! packet type (u8) | battery voltage | interior temp 1-3 | exterior temp
//! | pressure (Pa) | humidity                                   (f32 each)
//! | GPS-1 year month day hour minute second                    (u8 each)
//! | GPS-1 latitude longitude (1e-7 deg) altitude (cm)          (i32 each)
//! | GPS-1 speed (u32) heading (u16) satellites (u8)
//! | accel xyz | gyro xyz | mag xyz | pitch roll yaw             (f32 each)
//! | reset time ms (u32) | logging (bool) | filename index (u16)
//! | data age ms (u32) | relay bitmask (u32)
//! | GPS-2 year month day hour minute second                    (u8 each)
//! | GPS-2 latitude longitude altitude                          (i32 each)
//! ```

use std::fmt;

use jiff::civil::DateTime;
use jiff::ToSpan;

use crate::error::{RecordError, Result};
use crate::field::{FieldType, Value};
use crate::record::Record;
use crate::schema::PacketSchema;
use crate::traits::Packet;

const PA_TO_PSI: f64 = 0.000145038;
const CM_TO_FEET: f64 = 0.0328084;
const SPEED_TO_MPH: f64 = 0.000621371;
const COORDINATE_SCALE: f64 = 10_000_000.0;
const MS_PER_SECOND: f64 = 1000.0;
const GPS_YEAR_BASE: i16 = 2000;
// Ground station displays fix times in Pacific daylight time.
const GPS_UTC_OFFSET_HOURS: i64 = 7;

const FIELDS: [FieldType; 46] = [
    FieldType::Byte,
    FieldType::Float32,
    FieldType::Float32,
    FieldType::Float32,
    FieldType::Float32,
    FieldType::Float32,
    FieldType::Float32,
    FieldType::Float32,
    FieldType::Byte,
    FieldType::Byte,
    FieldType::Byte,
    FieldType::Byte,
    FieldType::Byte,
    FieldType::Byte,
    FieldType::Int32,
    FieldType::Int32,
    FieldType::Int32,
    FieldType::UInt32,
    FieldType::UInt16,
    FieldType::Byte,
    FieldType::Float32,
    FieldType::Float32,
    FieldType::Float32,
    FieldType::Float32,
    FieldType::Float32,
    FieldType::Float32,
    FieldType::Float32,
    FieldType::Float32,
    FieldType::Float32,
    FieldType::Float32,
    FieldType::Float32,
    FieldType::Float32,
    FieldType::UInt32,
    FieldType::Bool,
    FieldType::UInt16,
    FieldType::UInt32,
    FieldType::UInt32,
    FieldType::Byte,
    FieldType::Byte,
    FieldType::Byte,
    FieldType::Byte,
    FieldType::Byte,
    FieldType::Byte,
    FieldType::Int32,
    FieldType::Int32,
    FieldType::Int32,
];

/// Telemetry packet schema.
pub const TELEMETRY_SCHEMA: PacketSchema = PacketSchema::new("telemetry", &FIELDS);

/// Named telemetry fields, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TelemetryField {
    PacketType,
    BatteryVoltage,
    InteriorTemperature1,
    InteriorTemperature2,
    InteriorTemperature3,
    ExteriorTemperature,
    Pressure,
    Humidity,
    Year1,
    Month1,
    Day1,
    Hour1,
    Minute1,
    Second1,
    Latitude1,
    Longitude1,
    Altitude1,
    Speed1,
    Heading1,
    NumSatellites1,
    AccelX,
    AccelY,
    AccelZ,
    GyroX,
    GyroY,
    GyroZ,
    MagX,
    MagY,
    MagZ,
    Pitch,
    Roll,
    Yaw,
    ResetTime,
    DataLogging,
    FilenameIndex,
    DataAge,
    RelayStates,
    Year2,
    Month2,
    Day2,
    Hour2,
    Minute2,
    Second2,
    Latitude2,
    Longitude2,
    Altitude2,
}

impl TelemetryField {
    pub const ALL: [TelemetryField; 46] = [
        Self::PacketType,
        Self::BatteryVoltage,
        Self::InteriorTemperature1,
        Self::InteriorTemperature2,
        Self::InteriorTemperature3,
        Self::ExteriorTemperature,
        Self::Pressure,
        Self::Humidity,
        Self::Year1,
        Self::Month1,
        Self::Day1,
        Self::Hour1,
        Self::Minute1,
        Self::Second1,
        Self::Latitude1,
        Self::Longitude1,
        Self::Altitude1,
        Self::Speed1,
        Self::Heading1,
        Self::NumSatellites1,
        Self::AccelX,
        Self::AccelY,
        Self::AccelZ,
        Self::GyroX,
        Self::GyroY,
        Self::GyroZ,
        Self::MagX,
        Self::MagY,
        Self::MagZ,
        Self::Pitch,
        Self::Roll,
        Self::Yaw,
        Self::ResetTime,
        Self::DataLogging,
        Self::FilenameIndex,
        Self::DataAge,
        Self::RelayStates,
        Self::Year2,
        Self::Month2,
        Self::Day2,
        Self::Hour2,
        Self::Minute2,
        Self::Second2,
        Self::Latitude2,
        Self::Longitude2,
        Self::Altitude2,
    ];

    /// Position of this field in the schema.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn field_type(self) -> FieldType {
        FIELDS[self.index()]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::PacketType => "packet_type",
            Self::BatteryVoltage => "battery_voltage",
            Self::InteriorTemperature1 => "interior_temperature_1",
            Self::InteriorTemperature2 => "interior_temperature_2",
            Self::InteriorTemperature3 => "interior_temperature_3",
            Self::ExteriorTemperature => "exterior_temperature",
            Self::Pressure => "pressure",
            Self::Humidity => "humidity",
            Self::Year1 => "year_1",
            Self::Month1 => "month_1",
            Self::Day1 => "day_1",
            Self::Hour1 => "hour_1",
            Self::Minute1 => "minute_1",
            Self::Second1 => "second_1",
            Self::Latitude1 => "latitude_1",
            Self::Longitude1 => "longitude_1",
            Self::Altitude1 => "altitude_1",
            Self::Speed1 => "speed_1",
            Self::Heading1 => "heading_1",
            Self::NumSatellites1 => "num_satellites_1",
            Self::AccelX => "accel_x",
            Self::AccelY => "accel_y",
            Self::AccelZ => "accel_z",
            Self::GyroX => "gyro_x",
            Self::GyroY => "gyro_y",
            Self::GyroZ => "gyro_z",
            Self::MagX => "mag_x",
            Self::MagY => "mag_y",
            Self::MagZ => "mag_z",
            Self::Pitch => "pitch",
            Self::Roll => "roll",
            Self::Yaw => "yaw",
            Self::ResetTime => "reset_time",
            Self::DataLogging => "data_logging",
            Self::FilenameIndex => "filename_index",
            Self::DataAge => "data_age",
            Self::RelayStates => "relay_states",
            Self::Year2 => "year_2",
            Self::Month2 => "month_2",
            Self::Day2 => "day_2",
            Self::Hour2 => "hour_2",
            Self::Minute2 => "minute_2",
            Self::Second2 => "second_2",
            Self::Latitude2 => "latitude_2",
            Self::Longitude2 => "longitude_2",
            Self::Altitude2 => "altitude_2",
        }
    }
}

/// Which of the two on-board GPS receivers a fix came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpsSource {
    /// Receiver on the sensor computer.
    Sensor,
    /// Receiver on the communication computer.
    Comm,
}

impl GpsSource {
    const fn fields(self) -> [TelemetryField; 9] {
        use TelemetryField::*;
        match self {
            GpsSource::Sensor => [
                Year1, Month1, Day1, Hour1, Minute1, Second1, Latitude1, Longitude1, Altitude1,
            ],
            GpsSource::Comm => [
                Year2, Month2, Day2, Hour2, Minute2, Second2, Latitude2, Longitude2, Altitude2,
            ],
        }
    }
}

/// Raw position and time reported by one GPS receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GpsFix {
    /// Years since 2000.
    pub year: u8,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Degrees × 10⁷.
    pub latitude_raw: i32,
    /// Degrees × 10⁷.
    pub longitude_raw: i32,
    /// Centimeters.
    pub altitude_raw: i32,
}

impl GpsFix {
    pub fn latitude(&self) -> f64 {
        f64::from(self.latitude_raw) / COORDINATE_SCALE
    }

    pub fn longitude(&self) -> f64 {
        f64::from(self.longitude_raw) / COORDINATE_SCALE
    }

    /// Altitude in feet.
    pub fn altitude(&self) -> f64 {
        CM_TO_FEET * f64::from(self.altitude_raw)
    }

    /// Fix time shifted to Pacific time.
    ///
    /// Receivers report month and day 0 before they have a lock, so any month
    /// outside 1..=12 or day outside 1..=31 is read as 1. Returns `None` when
    /// the remaining fields still do not form a real date-time.
    pub fn timestamp(&self) -> Option<DateTime> {
        let month = if (1..=12).contains(&self.month) { self.month } else { 1 };
        let day = if (1..=31).contains(&self.day) { self.day } else { 1 };

        let utc = DateTime::new(
            GPS_YEAR_BASE + i16::from(self.year),
            i8::try_from(month).ok()?,
            i8::try_from(day).ok()?,
            i8::try_from(self.hour).ok()?,
            i8::try_from(self.minute).ok()?,
            i8::try_from(self.second).ok()?,
            0,
        )
        .ok()?;
        utc.checked_sub(GPS_UTC_OFFSET_HOURS.hours()).ok()
    }
}

/// Orientation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Attitude {
    pub pitch: f32,
    pub roll: f32,
    pub yaw: f32,
}

/// A telemetry packet.
#[derive(Debug, Clone, PartialEq)]
pub struct Telemetry {
    record: Record,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl Telemetry {
    /// A zeroed telemetry packet; the discriminator already reads `Data`.
    pub fn new() -> Self {
        Self {
            record: Record::new(TELEMETRY_SCHEMA),
        }
    }

    pub fn value(&self, field: TelemetryField) -> Value {
        self.record
            .get(field.index())
            .unwrap_or(field.field_type().default_value())
    }

    /// Set a raw field value; the value must have the field's wire type.
    pub fn set(&mut self, field: TelemetryField, value: impl Into<Value>) -> Result<()> {
        self.record.set(field.index(), value)
    }

    pub fn battery_voltage(&self) -> f32 {
        self.f32_at(TelemetryField::BatteryVoltage)
    }

    pub fn interior_temperatures(&self) -> [f32; 3] {
        [
            self.f32_at(TelemetryField::InteriorTemperature1),
            self.f32_at(TelemetryField::InteriorTemperature2),
            self.f32_at(TelemetryField::InteriorTemperature3),
        ]
    }

    pub fn exterior_temperature(&self) -> f32 {
        self.f32_at(TelemetryField::ExteriorTemperature)
    }

    /// Raw barometric pressure in pascals.
    pub fn pressure_raw(&self) -> f32 {
        self.f32_at(TelemetryField::Pressure)
    }

    /// Barometric pressure in PSI.
    pub fn pressure(&self) -> f64 {
        PA_TO_PSI * f64::from(self.pressure_raw())
    }

    pub fn humidity(&self) -> f32 {
        self.f32_at(TelemetryField::Humidity)
    }

    pub fn gps(&self, source: GpsSource) -> GpsFix {
        let [year, month, day, hour, minute, second, lat, lon, alt] = source.fields();
        GpsFix {
            year: self.u8_at(year),
            month: self.u8_at(month),
            day: self.u8_at(day),
            hour: self.u8_at(hour),
            minute: self.u8_at(minute),
            second: self.u8_at(second),
            latitude_raw: self.i32_at(lat),
            longitude_raw: self.i32_at(lon),
            altitude_raw: self.i32_at(alt),
        }
    }

    /// Write a fix into the fields of `source`.
    pub fn set_gps(&mut self, source: GpsSource, fix: GpsFix) -> Result<()> {
        let [year, month, day, hour, minute, second, lat, lon, alt] = source.fields();
        self.set(year, fix.year)?;
        self.set(month, fix.month)?;
        self.set(day, fix.day)?;
        self.set(hour, fix.hour)?;
        self.set(minute, fix.minute)?;
        self.set(second, fix.second)?;
        self.set(lat, fix.latitude_raw)?;
        self.set(lon, fix.longitude_raw)?;
        self.set(alt, fix.altitude_raw)
    }

    /// Raw ground speed from the sensor-computer receiver.
    pub fn speed_raw(&self) -> u32 {
        self.value(TelemetryField::Speed1).as_u32().unwrap_or_default()
    }

    /// Ground speed in miles per hour.
    pub fn speed(&self) -> f64 {
        SPEED_TO_MPH * f64::from(self.speed_raw())
    }

    pub fn heading(&self) -> u16 {
        self.value(TelemetryField::Heading1)
            .as_u16()
            .unwrap_or_default()
    }

    pub fn num_satellites(&self) -> u8 {
        self.u8_at(TelemetryField::NumSatellites1)
    }

    pub fn acceleration(&self) -> [f32; 3] {
        self.triple(
            TelemetryField::AccelX,
            TelemetryField::AccelY,
            TelemetryField::AccelZ,
        )
    }

    pub fn rates(&self) -> [f32; 3] {
        self.triple(
            TelemetryField::GyroX,
            TelemetryField::GyroY,
            TelemetryField::GyroZ,
        )
    }

    pub fn magnetic_field(&self) -> [f32; 3] {
        self.triple(
            TelemetryField::MagX,
            TelemetryField::MagY,
            TelemetryField::MagZ,
        )
    }

    pub fn attitude(&self) -> Attitude {
        Attitude {
            pitch: self.f32_at(TelemetryField::Pitch),
            roll: self.f32_at(TelemetryField::Roll),
            yaw: self.f32_at(TelemetryField::Yaw),
        }
    }

    pub fn reset_time_ms(&self) -> u32 {
        self.value(TelemetryField::ResetTime)
            .as_u32()
            .unwrap_or_default()
    }

    /// Seconds since the instrument last reset.
    pub fn reset_time(&self) -> f64 {
        f64::from(self.reset_time_ms()) / MS_PER_SECOND
    }

    pub fn data_age_ms(&self) -> u32 {
        self.value(TelemetryField::DataAge)
            .as_u32()
            .unwrap_or_default()
    }

    /// Seconds since the sensor computer last delivered data.
    pub fn data_age(&self) -> f64 {
        f64::from(self.data_age_ms()) / MS_PER_SECOND
    }

    pub fn data_logging(&self) -> bool {
        self.value(TelemetryField::DataLogging)
            .as_bool()
            .unwrap_or_default()
    }

    pub fn filename_index(&self) -> u16 {
        self.value(TelemetryField::FilenameIndex)
            .as_u16()
            .unwrap_or_default()
    }

    /// Name of the on-board log file, e.g. `DATA007.CSV`.
    pub fn filename(&self) -> String {
        format!("DATA{:03}.CSV", self.filename_index())
    }

    pub fn relay_mask(&self) -> u32 {
        self.value(TelemetryField::RelayStates)
            .as_u32()
            .unwrap_or_default()
    }

    /// Relays 1-4, from bits 0-3 of the relay bitmask.
    pub fn relay_states(&self) -> [bool; 4] {
        let mask = self.relay_mask();
        [0, 1, 2, 3].map(|bit| mask & (1 << bit) != 0)
    }

    pub fn set_relay_states(&mut self, relays: [bool; 4]) -> Result<()> {
        let mask = relays
            .iter()
            .enumerate()
            .fold(0u32, |mask, (bit, on)| mask | (u32::from(*on) << bit));
        self.set(TelemetryField::RelayStates, mask)
    }

    fn f32_at(&self, field: TelemetryField) -> f32 {
        self.value(field).as_f32().unwrap_or_default()
    }

    fn u8_at(&self, field: TelemetryField) -> u8 {
        self.value(field).as_u8().unwrap_or_default()
    }

    fn i32_at(&self, field: TelemetryField) -> i32 {
        self.value(field).as_i32().unwrap_or_default()
    }

    fn triple(&self, x: TelemetryField, y: TelemetryField, z: TelemetryField) -> [f32; 3] {
        [self.f32_at(x), self.f32_at(y), self.f32_at(z)]
    }
}

impl Packet for Telemetry {
    fn schema() -> PacketSchema {
        TELEMETRY_SCHEMA
    }

    fn from_record(record: Record) -> Result<Self> {
        if *record.schema() != TELEMETRY_SCHEMA {
            return Err(RecordError::SchemaMismatch {
                expected: TELEMETRY_SCHEMA.name(),
                actual: record.schema().name(),
            });
        }
        Ok(Self { record })
    }

    fn record(&self) -> &Record {
        &self.record
    }

    fn into_record(self) -> Record {
        self.record
    }
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [t1, t2, t3] = self.interior_temperatures();
        writeln!(f, "{:<33}{:.2}", "Battery Voltage:", self.battery_voltage())?;
        writeln!(f, "{:<33}{}", "Data Logging:", self.data_logging())?;
        writeln!(f, "{:<33}{}", "Data Filename:", self.filename())?;
        writeln!(f, "{:<33}{:.2}", "Time Since Instrument Reset (s):", self.reset_time())?;
        writeln!(f, "{:<33}{:.2}", "Data Age (s):", self.data_age())?;
        writeln!(f)?;
        writeln!(f, "{:<33}{:.2}", "Interior Temperature 1 (F):", t1)?;
        writeln!(f, "{:<33}{:.2}", "Interior Temperature 2 (F):", t2)?;
        writeln!(f, "{:<33}{:.2}", "Interior Temperature 3 (F):", t3)?;
        writeln!(f, "{:<33}{:.2}", "Exterior Temperature (F):", self.exterior_temperature())?;
        writeln!(f, "{:<33}{:.2}", "Pressure (PSI):", self.pressure())?;
        writeln!(f, "{:<33}{:.2}", "Humidity (%):", self.humidity())?;

        for source in [GpsSource::Sensor, GpsSource::Comm] {
            let fix = self.gps(source);
            let time = fix
                .timestamp()
                .map(|t| t.strftime("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "invalid".to_string());
            writeln!(f)?;
            writeln!(f, "{:<33}{}", "GPS Time:", time)?;
            writeln!(f, "{:<33}{:.9}", "Latitude:", fix.latitude())?;
            writeln!(f, "{:<33}{:.9}", "Longitude:", fix.longitude())?;
            writeln!(f, "{:<33}{:.2}", "Altitude (ft):", fix.altitude())?;
            if source == GpsSource::Sensor {
                writeln!(f, "{:<33}{:.2}", "Speed (MPH):", self.speed())?;
            }
        }
        writeln!(f)?;

        let [ax, ay, az] = self.acceleration();
        let [gx, gy, gz] = self.rates();
        let [mx, my, mz] = self.magnetic_field();
        let attitude = self.attitude();
        writeln!(f, "{:<33}{ax:.2}, {ay:.2}, {az:.2}", "Acceleration (x, y, z):")?;
        writeln!(f, "{:<33}{gx:.2}, {gy:.2}, {gz:.2}", "Rates (x, y, z):")?;
        writeln!(f, "{:<33}{mx:.2}, {my:.2}, {mz:.2}", "Magnetic Field (x, y, z):")?;
        writeln!(f, "{:<33}{:.2}", "Roll (deg):", attitude.roll)?;
        writeln!(f, "{:<33}{:.2}", "Pitch (deg):", attitude.pitch)?;
        writeln!(f, "{:<33}{:.2}", "Yaw (deg):", attitude.yaw)?;
        writeln!(f)?;

        let relays: String = self
            .relay_states()
            .iter()
            .map(|on| if *on { "ON  " } else { "OFF  " })
            .collect();
        writeln!(f, "{:<33}{}", "Relay States:", relays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::PacketKind;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6 * b.abs().max(1.0)
    }

    #[test]
    fn schema_has_expected_shape() {
        assert_eq!(TELEMETRY_SCHEMA.len(), 46);
        assert_eq!(TELEMETRY_SCHEMA.byte_width(), 135);
    }

    #[test]
    fn field_enum_matches_schema_order() {
        for (i, field) in TelemetryField::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
            assert_eq!(TELEMETRY_SCHEMA.field(i), Some(field.field_type()));
        }
    }

    #[test]
    fn new_packet_is_data_kind() {
        let packet = Telemetry::new();
        assert_eq!(packet.record().kind(), PacketKind::Data);
    }

    #[test]
    fn unit_conversions() {
        let mut packet = Telemetry::new();
        packet.set(TelemetryField::BatteryVoltage, 11.38f32).unwrap();
        packet.set(TelemetryField::Pressure, 1000.0f32).unwrap();
        packet.set(TelemetryField::Altitude1, 100_000i32).unwrap();
        packet.set(TelemetryField::Latitude1, 461_234_567i32).unwrap();
        packet.set(TelemetryField::Longitude1, -1_181_234_567i32).unwrap();
        packet.set(TelemetryField::Speed1, 1000u32).unwrap();
        packet.set(TelemetryField::ResetTime, 3_600_000u32).unwrap();
        packet.set(TelemetryField::DataAge, 12_345u32).unwrap();

        assert_eq!(packet.battery_voltage(), 11.38f32);
        assert!(approx(packet.pressure(), 0.145038));
        let fix = packet.gps(GpsSource::Sensor);
        assert!(approx(fix.altitude(), 3280.84));
        assert!(approx(fix.latitude(), 46.1234567));
        assert!(approx(fix.longitude(), -118.1234567));
        assert!(approx(packet.speed(), 0.621371));
        assert!(approx(packet.reset_time(), 3600.0));
        assert!(approx(packet.data_age(), 12.345));
    }

    #[test]
    fn gps_sources_are_independent() {
        let mut packet = Telemetry::new();
        let fix = GpsFix {
            year: 17,
            month: 10,
            day: 7,
            hour: 17,
            minute: 53,
            second: 49,
            latitude_raw: 1,
            longitude_raw: 2,
            altitude_raw: 3,
        };
        packet.set_gps(GpsSource::Comm, fix).unwrap();
        assert_eq!(packet.gps(GpsSource::Comm), fix);
        assert_eq!(packet.gps(GpsSource::Sensor), GpsFix::default());
    }

    #[test]
    fn relay_bits_map_to_relays() {
        let mut packet = Telemetry::new();
        packet.set(TelemetryField::RelayStates, 0b0101u32).unwrap();
        assert_eq!(packet.relay_states(), [true, false, true, false]);

        packet.set_relay_states([false, true, true, true]).unwrap();
        assert_eq!(packet.relay_mask(), 0b1110);
    }

    #[test]
    fn relay_states_ignore_high_bits() {
        let mut packet = Telemetry::new();
        packet.set(TelemetryField::RelayStates, 0xFFFF_FFF0u32).unwrap();
        assert_eq!(packet.relay_states(), [false; 4]);
    }

    #[test]
    fn filename_is_zero_padded() {
        let mut packet = Telemetry::new();
        packet.set(TelemetryField::FilenameIndex, 7u16).unwrap();
        assert_eq!(packet.filename(), "DATA007.CSV");
        packet.set(TelemetryField::FilenameIndex, 1234u16).unwrap();
        assert_eq!(packet.filename(), "DATA1234.CSV");
    }

    #[test]
    fn gps_timestamp_shifts_to_pacific() {
        let fix = GpsFix {
            year: 17,
            month: 10,
            day: 7,
            hour: 3,
            minute: 4,
            second: 5,
            ..GpsFix::default()
        };
        let time = fix.timestamp().unwrap();
        assert_eq!(time, DateTime::new(2017, 10, 6, 20, 4, 5, 0).unwrap());
    }

    #[test]
    fn gps_timestamp_clamps_missing_date() {
        let fix = GpsFix {
            hour: 12,
            ..GpsFix::default()
        };
        let time = fix.timestamp().unwrap();
        assert_eq!(time, DateTime::new(2000, 1, 1, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn gps_timestamp_rejects_impossible_date() {
        let fix = GpsFix {
            year: 17,
            month: 2,
            day: 31,
            ..GpsFix::default()
        };
        assert_eq!(fix.timestamp(), None);

        let fix = GpsFix {
            hour: 99,
            ..GpsFix::default()
        };
        assert_eq!(fix.timestamp(), None);
    }

    #[test]
    fn set_rejects_wrong_type() {
        let mut packet = Telemetry::new();
        assert!(matches!(
            packet.set(TelemetryField::Altitude1, 1.0f32),
            Err(RecordError::TypeMismatch { index: 16, .. })
        ));
    }

    #[test]
    fn from_record_rejects_other_schema() {
        let other = Record::new(crate::command::COMMAND_SCHEMA);
        assert!(matches!(
            Telemetry::from_record(other),
            Err(RecordError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn display_lists_readings() {
        let mut packet = Telemetry::new();
        packet.set(TelemetryField::BatteryVoltage, 11.38f32).unwrap();
        packet.set(TelemetryField::RelayStates, 0b0001u32).unwrap();
        let text = packet.to_string();
        assert!(text.contains("Battery Voltage:                 11.38"));
        assert!(text.contains("Relay States:                    ON  OFF  OFF  OFF  \n"));
        assert!(text.contains("Data Filename:                   DATA000.CSV"));
    }

    #[test]
    fn display_prints_gps_time_with_space_separator() {
        let mut packet = Telemetry::new();
        let fix = GpsFix {
            year: 17,
            month: 10,
            day: 7,
            hour: 3,
            minute: 4,
            second: 5,
            ..GpsFix::default()
        };
        packet.set_gps(GpsSource::Sensor, fix).unwrap();
        let text = packet.to_string();
        assert!(text.contains("GPS Time:                        2017-10-06 20:04:05\n"));
        assert!(!text.contains("2017-10-06T"));
    }
}
