//! Demo fruit basket answered by a parent and a child engine

use evaluation_application::{Engine, EngineModule};
use evaluation_domain::{
    EngineError, Expression, ExpressionAggregator, Parameterless, ParameterlessExpression,
    Question,
};

pub struct HowManyFruits;

impl Question for HowManyFruits {
    type Answer = i32;
    type Parameter = ();

    fn describe(&self) -> String {
        "how many fruits are in the basket?".to_string()
    }
}

pub struct HowManyFruitsStartingWith;

impl Question for HowManyFruitsStartingWith {
    type Answer = i32;
    type Parameter = char;

    fn describe(&self) -> String {
        "how many fruits start with the given letter?".to_string()
    }
}

pub struct WhatIsInTheBasket;

impl Question for WhatIsInTheBasket {
    type Answer = Vec<String>;
    type Parameter = ();

    fn describe(&self) -> String {
        "which fruits are in the basket?".to_string()
    }
}

/// A number of fruits of one kind
#[derive(Debug, Clone, Copy)]
pub struct Fruit {
    pub kind: &'static str,
    pub count: i32,
}

impl Fruit {
    pub const fn new(kind: &'static str, count: i32) -> Self {
        Self { kind, count }
    }
}

impl ParameterlessExpression<i32> for Fruit {
    fn evaluate(&self) -> i32 {
        self.count
    }

    fn describe(&self) -> String {
        format!("{} {}", self.count, self.kind)
    }
}

struct KindOf(Fruit);

impl ParameterlessExpression<String> for KindOf {
    fn evaluate(&self) -> String {
        self.0.kind.to_string()
    }

    fn describe(&self) -> String {
        format!("kind of {}", self.0.kind)
    }
}

struct StartingWith(Fruit);

impl Expression<i32, char> for StartingWith {
    fn evaluate(&self, letter: &char) -> i32 {
        let matches = self
            .0
            .kind
            .chars()
            .next()
            .is_some_and(|first| first.eq_ignore_ascii_case(letter));
        if matches { self.0.count } else { 0 }
    }

    fn describe(&self) -> String {
        format!("{} {}", self.0.count, self.0.kind)
    }
}

/// Shared fruits known to the parent engine
pub const PARENT_FRUITS: [Fruit; 2] = [Fruit::new("Apple", 1), Fruit::new("Banana", 4)];

/// Fruits the child engine adds on top
pub const CHILD_FRUITS: [Fruit; 1] = [Fruit::new("Ananas", 2)];

/// Registers how the basket questions are answered for a set of fruits
///
/// The parent module also sets the aggregators. A child module only adds
/// expressions and inherits the aggregators when definitions are merged.
pub struct BasketModule {
    fruits: &'static [Fruit],
    with_aggregators: bool,
}

impl BasketModule {
    pub fn parent() -> Self {
        Self {
            fruits: &PARENT_FRUITS,
            with_aggregators: true,
        }
    }

    pub fn child() -> Self {
        Self {
            fruits: &CHILD_FRUITS,
            with_aggregators: false,
        }
    }
}

impl EngineModule for BasketModule {
    fn load(&self, engine: &Engine) -> Result<(), EngineError> {
        let fruits = self.fruits;

        let mut count = engine.solve::<HowManyFruits>()?;
        let mut starting_with = engine.solve::<HowManyFruitsStartingWith>()?;
        let mut basket = engine.solve_with_result_mapping::<WhatIsInTheBasket, String>()?;

        if self.with_aggregators {
            count = count.aggregate_with(
                ExpressionAggregator::new(0, |sum: i32, n: i32| sum + n)
                    .with_function_description("(sum, count) => sum + count"),
            );
            starting_with = starting_with
                .aggregate_with_expression_aggregator(0, |sum: i32, n: i32| sum + n);
            basket = basket.aggregate_with_expression_aggregator(
                Vec::new(),
                |mut kinds: Vec<String>, kind: String| {
                    kinds.push(kind);
                    kinds
                },
            );
        }

        count.by_evaluating_many(move |_: &HowManyFruits| {
            fruits.iter().copied().map(Parameterless)
        });
        starting_with.by_evaluating_many(move |_: &HowManyFruitsStartingWith| {
            fruits.iter().copied().map(StartingWith)
        });
        basket.by_evaluating_many(move |_: &WhatIsInTheBasket| {
            fruits.iter().copied().map(|fruit| Parameterless(KindOf(fruit)))
        });

        Ok(())
    }
}

/// Build the parent engine and a child engine sharing its definitions
pub fn engines() -> Result<(Engine, Engine), EngineError> {
    let parent = Engine::new();
    parent.load(&BasketModule::parent())?;

    let child = Engine::with_parent(&parent);
    child.load(&BasketModule::child())?;

    Ok((parent, child))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_counts_its_fruits() {
        let (parent, _) = engines().unwrap();
        assert_eq!(parent.answer(&HowManyFruits).unwrap(), 5);
    }

    #[test]
    fn test_child_adds_its_fruits() {
        let (_, child) = engines().unwrap();
        assert_eq!(child.answer(&HowManyFruits).unwrap(), 7);
        assert_eq!(
            child.answer(&WhatIsInTheBasket).unwrap(),
            vec!["Apple", "Banana", "Ananas"]
        );
    }

    #[test]
    fn test_starting_with_letter() {
        let (parent, child) = engines().unwrap();
        assert_eq!(parent.answer_with(&HowManyFruitsStartingWith, 'A').unwrap(), 1);
        assert_eq!(child.answer_with(&HowManyFruitsStartingWith, 'a').unwrap(), 3);
        assert_eq!(child.answer_with(&HowManyFruitsStartingWith, 'B').unwrap(), 4);
        assert_eq!(child.answer_with(&HowManyFruitsStartingWith, 'C').unwrap(), 0);
    }
}
