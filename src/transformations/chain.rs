use crate::transformations::transformation::*;

macro_const! {
    const DOC: &str = r"
Sequential application of transformations

The first step is applied to the input, each following step is applied to the output of the
previous one. Nested chains are flattened on construction, so chaining is associative
structurally and not only semantically.
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "ChainParameters")]
pub struct ChainTransformation {
    steps: Vec<Transformation>,
}

impl ChainTransformation {
    pub fn new(steps: impl IntoIterator<Item = Transformation>) -> Self {
        let steps = steps
            .into_iter()
            .flat_map(Transformation::into_steps)
            .collect();
        Self { steps }
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    /// Steps in order of application
    pub fn steps(&self) -> &[Transformation] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Transformation> {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Chain of `first` followed by `second`, nested chains are flattened
pub fn chain(first: impl Into<Transformation>, second: impl Into<Transformation>) -> Transformation {
    ChainTransformation::new([first.into(), second.into()]).into()
}

impl TransformationTrait for ChainTransformation {
    fn apply(&self, x: f64) -> Result<f64, DomainError> {
        self.steps.iter().try_fold(x, |x, step| step.apply(x))
    }

    fn image(&self, domain: Interval) -> Result<Interval, DomainError> {
        self.steps
            .iter()
            .try_fold(domain, |domain, step| step.image(domain))
    }

    fn describe(&self, input: &str) -> String {
        self.steps
            .iter()
            .fold(input.to_string(), |formula, step| step.describe(&formula))
    }
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename = "Chain")]
struct ChainParameters {
    steps: Vec<Transformation>,
}

impl From<ChainParameters> for ChainTransformation {
    fn from(p: ChainParameters) -> Self {
        Self::new(p.steps)
    }
}

impl JsonSchema for ChainTransformation {
    json_schema!(ChainParameters, false);
}
