use crate::check::{Report, check_bool, check_rational};
use frac_config::DriverOption;
use frac_number::Rational;

/// The checks of the rational type, in the order they're printed.
pub fn run_demo(option: &DriverOption) -> Report {
    let mut report = Report::new();

    let three = Rational::from(3u64);
    let athird = Rational::new(1, 3);

    report.push_info(format!("Three: {three}"));
    report.push_info(format!("One third: {athird}"));

    // a rational times an integer, in both orders
    report.push_check(check_rational("One third times two", athird * 2, Rational::new(2, 3), option));
    report.push_check(check_rational("Two times one third", 2 * athird, Rational::new(2, 3), option));

    // the results are normalized: 1/1, not 3/3
    report.push_check(check_rational("Three times one third", three * athird, Rational::new(1, 1), option));
    report.push_check(check_rational("Three times one third", 3 * athird, Rational::new(1, 1), option));

    let mut f = athird;
    f *= 2;
    report.push_check(check_rational("One third times two", f, Rational::new(2, 3), option));

    f *= athird;
    report.push_check(check_rational("Two third times one third", f, Rational::new(2, 9), option));

    report.push_check(check_bool("One third == one third", athird == Rational::new(1, 3), true));
    report.push_check(check_bool("One third != one forth", athird != Rational::new(1, 4), true));
    report.push_check(check_bool("One third == two sixth", athird == Rational::new(2, 6), true));
    report.push_check(check_bool("One third != three sixth", athird != Rational::new(3, 6), true));

    let afourth = Rational::new(1, 4);

    report.push_check(check_bool("athird < athird", athird.lt_rat(&athird), false));
    report.push_check(check_bool("afourth < athird", afourth.lt_rat(&athird), true));
    report.push_check(check_bool("athird  <= athird", athird.leq_rat(&athird), true));
    report.push_check(check_bool("athird  <= afourth", athird.leq_rat(&afourth), false));
    report.push_check(check_bool("athird  > athird", athird.gt_rat(&athird), false));
    report.push_check(check_bool("afourth > athird", afourth.gt_rat(&athird), false));
    report.push_check(check_bool("athird >= athird", athird.geq_rat(&athird), true));
    report.push_check(check_bool("athird >= afourth", athird.geq_rat(&afourth), true));

    report
}
