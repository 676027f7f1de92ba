use crate::error::Result;
use crate::record::Record;
use crate::schema::PacketSchema;

/// A concrete packet kind layered over a generic [`Record`].
///
/// Implementors are thin views: the record holds all state, the implementor
/// supplies the schema and named accessors.
pub trait Packet: Sized {
    /// The schema every record of this kind uses.
    fn schema() -> PacketSchema;

    /// Wrap a record, failing if it was built for another schema.
    fn from_record(record: Record) -> Result<Self>;

    fn record(&self) -> &Record;

    fn into_record(self) -> Record;
}
