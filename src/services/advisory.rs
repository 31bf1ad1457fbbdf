use crate::models::{CarryAdvice, WeatherContext, WindLevel};

/// Rain probability at which an umbrella is advised even without rain
const UMBRELLA_PROBABILITY: f64 = 0.6;
/// Below this rain probability the sky counts as reliably clear
const CLEAR_PROBABILITY: f64 = 0.2;
const SUNSHADE_FEELS_LIKE: f64 = 24.0;
const FAN_FEELS_LIKE: f64 = 27.0;
const HANDKERCHIEF_FEELS_LIKE: f64 = 24.0;
const GLOVES_FEELS_LIKE: f64 = 7.0;

/// What to carry today, from weather thresholds alone
pub fn carry_advice(ctx: &WeatherContext) -> CarryAdvice {
    let probability = ctx.precipitation_probability.clamp(0.0, 1.0);
    let feels_like = ctx.personal_feels_like;
    let precipitation = ctx.precipitation;

    let sunny = precipitation.is_clear()
        && probability < CLEAR_PROBABILITY
        && ctx.wind != WindLevel::Strong;

    CarryAdvice {
        umbrella: precipitation.is_rainy()
            || precipitation.is_snowy()
            || probability >= UMBRELLA_PROBABILITY,
        sunshade: sunny && feels_like >= SUNSHADE_FEELS_LIKE,
        fan: sunny && feels_like >= FAN_FEELS_LIKE,
        handkerchief: feels_like >= HANDKERCHIEF_FEELS_LIKE,
        gloves: feels_like <= GLOVES_FEELS_LIKE || precipitation.is_snowy(),
    }
}
