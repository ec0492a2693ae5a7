/// Implement [schemars::JsonSchema] methods by delegating to a parameter structure
macro_rules! json_schema {
    ($parameters: ty, $is_referenceable: expr_2021) => {
        fn is_referenceable() -> bool {
            $is_referenceable
        }

        fn schema_name() -> String {
            <$parameters>::schema_name()
        }

        fn json_schema(
            generator: &mut schemars::r#gen::SchemaGenerator,
        ) -> schemars::schema::Schema {
            <$parameters>::json_schema(generator)
        }
    };
}

/// Check that a parameter is finite, return [crate::ConfigurationError] otherwise
macro_rules! ensure_finite {
    ($($name: ident),+ $(,)?) => {
        $(
            if !$name.is_finite() {
                return Err($crate::error::ConfigurationError::NonFiniteParameter {
                    name: stringify!($name),
                    value: $name,
                });
            }
        )+
    };
}
