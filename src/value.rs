use crate::StaticCowStr;

pub struct ContextValue(ContextValueInner);

enum ContextValueInner {
    Null,
    String(String),
    Debug(Box<dyn std::fmt::Debug + Send + Sync + 'static>),
    Display(Box<dyn std::fmt::Display + Send + Sync + 'static>),
    Error(Box<dyn std::error::Error + Send + Sync + 'static>),
    Serde(Box<dyn erased_serde::Serialize + Send + Sync + 'static>),
}

impl From<ContextValueInner> for ContextValue {
    fn from(inner: ContextValueInner) -> Self {
        ContextValue(inner)
    }
}

impl ContextValue {
    #[must_use]
    pub fn null() -> Self {
        ContextValueInner::Null.into()
    }

    pub fn serde<S>(value: S) -> Self
    where
        S: serde::Serialize + Send + Sync + 'static,
    {
        let value = Box::new(value);
        ContextValueInner::Serde(value).into()
    }

    pub fn display<T>(value: T) -> Self
    where
        T: std::fmt::Display + Send + Sync + 'static,
    {
        let value = Box::new(value);
        ContextValueInner::Display(value).into()
    }

    pub fn debug<T>(value: T) -> Self
    where
        T: std::fmt::Debug + Send + Sync + 'static,
    {
        let value = Box::new(value);
        ContextValueInner::Debug(value).into()
    }

    pub fn error<T>(value: T) -> Self
    where
        T: std::error::Error + Send + Sync + 'static,
    {
        let value = Box::new(value);
        ContextValueInner::Error(value).into()
    }

    #[must_use]
    pub fn as_log_value(&self) -> log::kv::Value<'_> {
        match &self.0 {
            ContextValueInner::Null => log::kv::Value::null(),
            ContextValueInner::String(s) => log::kv::Value::from(s.as_str()),
            ContextValueInner::Display(value) => log::kv::Value::from_dyn_display(value),
            ContextValueInner::Debug(value) => log::kv::Value::from_dyn_debug(value),
            ContextValueInner::Error(value) => log::kv::Value::from_dyn_error(&**value),
            ContextValueInner::Serde(value) => log::kv::Value::from_serde(value),
        }
    }
}

impl serde::Serialize for ContextValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match &self.0 {
            ContextValueInner::Null => serializer.serialize_unit(),
            ContextValueInner::String(s) => serializer.serialize_str(s),
            ContextValueInner::Display(value) => serializer.collect_str(value),
            ContextValueInner::Debug(value) => {
                serializer.collect_str(&format_args!("{value:?}"))
            }
            ContextValueInner::Error(value) => serializer.collect_str(value),
            ContextValueInner::Serde(value) => serde::Serialize::serialize(value, serializer),
        }
    }
}

impl std::fmt::Debug for ContextValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            ContextValueInner::Null => f.write_str("Null"),
            ContextValueInner::String(s) => write!(f, "{s:?}"),
            ContextValueInner::Debug(value) => write!(f, "{value:?}"),
            ContextValueInner::Display(value) => write!(f, "{value}"),
            ContextValueInner::Error(value) => write!(f, "{value}"),
            ContextValueInner::Serde(_) => f.write_str("<serde>"),
        }
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        ContextValue(ContextValueInner::String(value.to_owned()))
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        ContextValue(ContextValueInner::String(value))
    }
}

impl From<StaticCowStr> for ContextValue {
    fn from(value: StaticCowStr) -> Self {
        ContextValue(ContextValueInner::String(value.into_owned()))
    }
}

macro_rules! impl_value_from {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for ContextValue {
            fn from(value: $ty) -> Self {
                ContextValue::serde(value)
            }
        }
    )*};
}

impl_value_from!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
