//! `define_port_error!`: declares a port's error enum together with one
//! snake_case constructor per variant.
//!
//! Constructor arguments take `impl Into<FieldType>`, so string fields accept
//! `&str` and optional fields accept `Some(..)` or `None` directly.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = concat!("Build a [`", stringify!($name), "::", stringify!($variant), "`].")]
                    pub fn [<$variant:snake>]($($($field: impl Into<$ty>),*)?) -> Self {
                        Self::$variant $( { $($field: $field.into()),* } )?
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum ThumbnailError {
            Busy => "thumbnailer busy",
            TooLarge { bytes: u64 } => "image of {bytes} bytes is too large",
            Failed { reason: String, hint: Option<String> } => "thumbnail failed: {reason}",
        }
    }

    #[test]
    fn unit_variant_constructor_takes_no_arguments() {
        assert_eq!(ThumbnailError::busy(), ThumbnailError::Busy);
    }

    #[test]
    fn numeric_fields_keep_their_type() {
        let err = ThumbnailError::too_large(4096_u64);
        assert_eq!(err.to_string(), "image of 4096 bytes is too large");
    }

    #[test]
    fn string_and_optional_fields_convert_on_the_way_in() {
        let err = ThumbnailError::failed("corrupt header", None::<String>);
        assert_eq!(
            err,
            ThumbnailError::Failed {
                reason: "corrupt header".to_owned(),
                hint: None,
            }
        );
    }
}
