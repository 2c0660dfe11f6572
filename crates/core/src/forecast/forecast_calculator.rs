use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use crate::goals::Goal;
use crate::settings::EngineSettings;
use crate::utils::{add_months, months_between, round_money};

use super::{
    build_trajectory, compound, monthly_rate, required_monthly_contribution, resolve_months,
    GoalForecast, WhatIfRequest, WhatIfResult,
};

/// Projects `current_value` to the goal's target date without further
/// contributions and solves for the monthly contribution that would reach it.
pub fn forecast_goal(
    goal: &Goal,
    current_value: Decimal,
    today: NaiveDate,
    settings: &EngineSettings,
) -> GoalForecast {
    let months_remaining =
        u32::try_from(months_between(today, goal.target_date).max(0)).unwrap_or(u32::MAX);
    let expected_annual_return = goal
        .expected_annual_return
        .unwrap_or(settings.default_annual_return);
    let rate = monthly_rate(expected_annual_return);

    let projected_value = compound(current_value, rate, months_remaining, Decimal::ZERO);
    let required =
        required_monthly_contribution(current_value, goal.target_amount, rate, months_remaining);
    let on_track = projected_value >= goal.target_amount;
    debug!(
        "Goal {}: {} months left, projected {} against {}",
        goal.id, months_remaining, projected_value, goal.target_amount
    );

    let narrative = if on_track {
        format!(
            "At this rate the portfolio reaches {} by {}, meeting the goal of {}.",
            projected_value, goal.target_date, goal.target_amount
        )
    } else {
        format!(
            "The portfolio is projected at {} by {}, below target. Contributing {} a month would close the gap.",
            projected_value,
            goal.target_date,
            round_money(required)
        )
    };

    GoalForecast {
        goal_id: goal.id.clone(),
        portfolio_id: goal.portfolio_id.clone(),
        current_value,
        target_amount: goal.target_amount,
        target_date: goal.target_date,
        expected_annual_return,
        projected_value,
        required_monthly_contribution: round_money(required),
        months_remaining,
        on_track,
        narrative,
        trajectory: build_trajectory(today, current_value, rate, months_remaining, Decimal::ZERO),
    }
}

/// Projects `current_value` under the request's contribution and return.
/// Missing values fall back to no contribution, the configured return and the
/// configured horizon.
pub fn run_what_if(
    current_value: Decimal,
    request: &WhatIfRequest,
    today: NaiveDate,
    settings: &EngineSettings,
) -> WhatIfResult {
    let months = resolve_months(
        request.months,
        request.target_date,
        today,
        settings.default_horizon_months,
    );
    let expected_annual_return = request
        .expected_annual_return
        .unwrap_or(settings.default_annual_return);
    let monthly_contribution = request.monthly_contribution.unwrap_or(Decimal::ZERO);
    let rate = monthly_rate(expected_annual_return);

    let projected_value = compound(current_value, rate, months, monthly_contribution);
    let end_date = add_months(today, months);
    let narrative = format!(
        "With a monthly contribution of {}, your portfolio could reach {} by {}.",
        monthly_contribution, projected_value, end_date
    );

    WhatIfResult {
        starting_value: current_value,
        projected_value,
        months,
        expected_annual_return,
        monthly_contribution,
        trajectory: build_trajectory(today, current_value, rate, months, monthly_contribution),
        narrative,
        end_date,
    }
}
