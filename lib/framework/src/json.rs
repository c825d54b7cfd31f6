use std::fmt;
use std::io;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use serde::de;
use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::Serializer;
use tokio::fs;

pub async fn load_file<T>(path: &Path) -> Result<T>
where
    T: de::DeserializeOwned,
{
    let json = fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read file, path={}", path.to_string_lossy()))?;
    from_json(&json)
}

pub fn from_json<'a, T>(json: &'a str) -> Result<T>
where
    T: de::Deserialize<'a>,
{
    serde_json::from_str(json).with_context(|| format!("failed to deserialize, json={json}"))
}

pub fn to_json<T>(object: &T) -> Result<String>
where
    T: Serialize + fmt::Debug,
{
    serde_json::to_string(object).with_context(|| format!("failed to serialize, object={object:?}"))
}

// ", " between members and ": " after keys, the layout python json.dumps produces
pub fn to_json_spaced<T>(object: &T) -> Result<String>
where
    T: Serialize + fmt::Debug,
{
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, SpacedFormatter);
    object
        .serialize(&mut serializer)
        .with_context(|| format!("failed to serialize, object={object:?}"))?;
    String::from_utf8(buffer).with_context(|| format!("serialized json is not utf-8, object={object:?}"))
}

struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}
