//! Integration tests for divisional chart assembly and serialization.
//!
//! Uses small hand-built rasi charts, no ephemeris needed.

use approx::assert_abs_diff_eq;
use dhruv_varga::{
    Amsha, AmshaRequest, DivisionalChart, Graha, GrahaAttributes, GrahaPosition, Motion,
    Nakshatra, Placed, Placement, PlacementFault, RasiChart, Rashi, SHODASHAVARGA, VARGAS,
    VargaError, compute_amsha_chart, compute_divisional_chart, compute_shodashavarga, to_dict,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn graha(g: Graha, sign: Rashi, deg: f64) -> GrahaPosition {
    GrahaPosition::new(g, Placement::new(sign, deg).expect("valid placement"))
}

/// Lagna Mesha 10 deg, Sun in Vrishabha, Moon in Mithuna.
fn two_graha_chart() -> RasiChart {
    let sun = graha(Graha::Surya, Rashi::Vrishabha, 15.5).with_attributes(GrahaAttributes {
        nakshatra: Some(Nakshatra::Rohini),
        pada: Some(2),
        motion: Some(Motion::Direct),
        ..GrahaAttributes::default()
    });
    let moon = graha(Graha::Chandra, Rashi::Mithuna, 8.2).with_attributes(GrahaAttributes {
        nakshatra: Some(Nakshatra::Ardra),
        pada: Some(1),
        motion: Some(Motion::Direct),
        ..GrahaAttributes::default()
    });
    RasiChart::whole_sign(Placement::new(Rashi::Mesha, 10.0).unwrap(), vec![sun, moon])
}

/// All nine grahas spread over the zodiac, lagna Vrischika 23.7 deg.
fn nine_graha_chart() -> RasiChart {
    let grahas = vec![
        graha(Graha::Surya, Rashi::Makara, 1.25),
        graha(Graha::Chandra, Rashi::Karka, 29.9),
        graha(Graha::Mangal, Rashi::Makara, 28.04),
        graha(Graha::Buddh, Rashi::Dhanu, 17.6),
        graha(Graha::Guru, Rashi::Mesha, 0.0),
        graha(Graha::Shukra, Rashi::Kumbha, 9.999),
        graha(Graha::Shani, Rashi::Kumbha, 13.3333),
        graha(Graha::Rahu, Rashi::Meena, 20.0).with_attributes(GrahaAttributes {
            motion: Some(Motion::Retrograde),
            ..GrahaAttributes::default()
        }),
        graha(Graha::Ketu, Rashi::Kanya, 20.0).with_attributes(GrahaAttributes {
            motion: Some(Motion::Retrograde),
            ..GrahaAttributes::default()
        }),
    ];
    RasiChart::whole_sign(Placement::new(Rashi::Vrischika, 23.7).unwrap(), grahas)
}

fn every_chart() -> Vec<(RasiChart, DivisionalChart)> {
    init_logging();
    let mut out = Vec::new();
    for rasi in [two_graha_chart(), nine_graha_chart()] {
        for &amsha in &SHODASHAVARGA {
            let d = compute_divisional_chart(&rasi, amsha.label()).expect("supported chart");
            out.push((rasi.clone(), d));
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Degrees
// ---------------------------------------------------------------------------

#[test]
fn divisional_ascendant_has_sign_degrees() {
    let d9 = compute_divisional_chart(&two_graha_chart(), "D9").unwrap();
    let deg = d9.lagna().placement().sign_degrees();
    assert!((0.0..30.0).contains(&deg));
}

#[test]
fn divisional_occupants_have_sign_degrees() {
    for (_, chart) in every_chart() {
        for house in chart.houses() {
            for occ in &house.occupants {
                let deg = occ.placement().sign_degrees();
                assert!((0.0..30.0).contains(&deg), "{} {deg}", chart.amsha());
            }
        }
    }
}

#[test]
fn serialized_charts_always_carry_sign_degrees() {
    for (_, chart) in every_chart() {
        let v = to_dict(&chart).unwrap();
        assert!(v["ascendant"]["signDegrees"].is_number(), "{}", chart.amsha());
        for house in v["houses"].as_array().unwrap() {
            for occ in house["occupants"].as_array().unwrap() {
                assert!(occ["signDegrees"].is_number(), "{}", chart.amsha());
                assert!(occ["name"].is_string());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Structure
// ---------------------------------------------------------------------------

#[test]
fn twelve_houses_in_cyclic_order() {
    for (_, chart) in every_chart() {
        let lagna_sign = chart.lagna().placement().rashi();
        for (i, house) in chart.houses().iter().enumerate() {
            assert_eq!(house.number as usize, i + 1);
            assert_eq!(house.sign, lagna_sign.advance(i as i32));
        }
    }
}

#[test]
fn occupant_conservation() {
    for (rasi, chart) in every_chart() {
        assert_eq!(chart.occupant_count(), rasi.grahas.len(), "{}", chart.amsha());
        for g in &rasi.grahas {
            let homes = chart
                .houses()
                .iter()
                .filter(|h| h.is_occupied_by(g.graha))
                .count();
            assert_eq!(homes, 1, "{} {}", chart.amsha(), g.graha);
        }
    }
}

#[test]
fn occupants_sit_in_house_of_their_sign() {
    for (_, chart) in every_chart() {
        for house in chart.houses() {
            for occ in &house.occupants {
                assert_eq!(occ.placement().rashi(), house.sign);
            }
        }
    }
}

#[test]
fn attributes_pass_through_unchanged() {
    let rasi = nine_graha_chart();
    for &amsha in &VARGAS {
        let chart = compute_amsha_chart(&rasi, &AmshaRequest::new(amsha)).unwrap();
        for g in &rasi.grahas {
            let mapped = chart.graha(g.graha).unwrap();
            assert_eq!(mapped.attributes, g.attributes, "{amsha} {}", g.graha);
        }
    }
}

#[test]
fn d1_is_identity() {
    for rasi in [two_graha_chart(), nine_graha_chart()] {
        let d1 = compute_divisional_chart(&rasi, "D1").unwrap();
        assert_eq!(d1.lagna().placement(), &rasi.lagna().unwrap().placement);
        for (ours, theirs) in d1.houses().iter().zip(&rasi.houses) {
            assert_eq!(ours.number, theirs.number);
            assert_eq!(ours.sign, theirs.sign);
            assert_eq!(ours.occupants, theirs.occupants);
        }
    }
}

#[test]
fn output_does_not_alias_input() {
    let mut rasi = nine_graha_chart();
    let chart = compute_divisional_chart(&rasi, "D1").unwrap();
    let before = chart.clone();

    rasi.grahas.clear();
    for house in &mut rasi.houses {
        house.occupants.clear();
    }
    assert_eq!(chart, before);
    assert_eq!(chart.occupant_count(), 9);
}

// ---------------------------------------------------------------------------
// Worked examples
// ---------------------------------------------------------------------------

#[test]
fn navamsha_lagna_on_division_boundary() {
    let d9 = compute_divisional_chart(&two_graha_chart(), "D9").unwrap();
    assert_eq!(d9.lagna().placement().rashi(), Rashi::Karka);
    assert_abs_diff_eq!(d9.lagna().placement().sign_degrees(), 0.0, epsilon = 1e-9);
}

#[test]
fn nine_graha_navamsha() {
    let d9 = compute_divisional_chart(&nine_graha_chart(), "D9").unwrap();
    // Lagna Vrischika 23.7: fixed → start Karka, k=7 → Kumbha
    assert_eq!(d9.lagna().placement().rashi(), Rashi::Kumbha);
    // Guru Mesha 0 → Mesha 0, 3rd from Kumbha
    let guru = d9.graha(Graha::Guru).unwrap();
    assert_eq!(guru.placement().rashi(), Rashi::Mesha);
    assert_eq!(d9.house_of(Graha::Guru).unwrap().number, 3);
    // Chandra Karka 29.9: last navamsha of a movable sign → Meena
    assert_eq!(d9.graha(Graha::Chandra).unwrap().placement().rashi(), Rashi::Meena);
}

#[test]
fn bhamsha_repeats_signs() {
    let rasi = RasiChart::whole_sign(Placement::new(Rashi::Mesha, 0.5).unwrap(), vec![]);
    let mut seen = Vec::new();
    for k in 0..27 {
        let deg = (k as f64 + 0.5) * Amsha::D27.division_span();
        let g = graha(Graha::Surya, Rashi::Mesha, deg);
        let chart = RasiChart { grahas: vec![g], ..rasi.clone() };
        let d27 = compute_divisional_chart(&chart, "D27").unwrap();
        seen.push(d27.graha(Graha::Surya).unwrap().placement().rashi());
    }
    assert_eq!(seen[0], seen[12]);
    assert_eq!(seen[0], seen[24]);
    assert_eq!(seen[0], Rashi::Mesha);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn unsupported_chart_type() {
    init_logging();
    for bad in ["D5", "D11", "D108", "navamsha", ""] {
        assert_eq!(
            compute_divisional_chart(&two_graha_chart(), bad),
            Err(VargaError::UnsupportedChartType(bad.to_string()))
        );
    }
}

#[test]
fn invalid_lagna_degree_rejected() {
    let mut rasi = two_graha_chart();
    rasi.houses[0].sign_degrees = Some(30.0);
    assert!(matches!(
        compute_divisional_chart(&rasi, "D9"),
        Err(VargaError::InvalidPlacement(PlacementFault::Degrees(_)))
    ));
}

#[test]
fn batch_fails_as_a_whole() {
    let mut rasi = two_graha_chart();
    rasi.houses.truncate(11);
    assert!(matches!(
        compute_shodashavarga(&rasi),
        Err(VargaError::InvalidChart(_))
    ));
}

// ---------------------------------------------------------------------------
// Determinism and sharing
// ---------------------------------------------------------------------------

#[test]
fn repeated_calls_are_identical() {
    let rasi = nine_graha_chart();
    for &amsha in &SHODASHAVARGA {
        let a = to_dict(&compute_divisional_chart(&rasi, amsha.label()).unwrap()).unwrap();
        let b = to_dict(&compute_divisional_chart(&rasi, amsha.label()).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn concurrent_calls_on_shared_chart() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RasiChart>();
    assert_send_sync::<DivisionalChart>();

    let rasi = nine_graha_chart();
    let expected = compute_shodashavarga(&rasi).unwrap();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| compute_shodashavarga(&rasi).unwrap()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}

// ---------------------------------------------------------------------------
// JSON input
// ---------------------------------------------------------------------------

const RASI_JSON: &str = r#"{
  "planets": [
    {"name": "Sun", "sign": "Taurus", "signDegrees": 15.5,
     "nakshatra": "Rohini", "pada": 2, "motion": "direct"},
    {"name": "Moon", "sign": "Gemini", "signDegrees": 8.2,
     "nakshatra": "Ardra", "pada": 1, "motion": "direct", "dignity": "neutral"}
  ],
  "houses": [
    {"number": 1, "sign": "Aries", "lord": "Mars", "signDegrees": 10.0},
    {"number": 2, "sign": "Taurus", "lord": "Venus"},
    {"number": 3, "sign": "Gemini", "lord": "Mercury"},
    {"number": 4, "sign": "Cancer", "lord": "Moon"},
    {"number": 5, "sign": "Leo", "lord": "Sun"},
    {"number": 6, "sign": "Virgo", "lord": "Mercury"},
    {"number": 7, "sign": "Libra", "lord": "Venus"},
    {"number": 8, "sign": "Scorpio", "lord": "Mars"},
    {"number": 9, "sign": "Sagittarius", "lord": "Jupiter"},
    {"number": 10, "sign": "Capricorn", "lord": "Saturn"},
    {"number": 11, "sign": "Aquarius", "lord": "Saturn"},
    {"number": 12, "sign": "Pisces", "lord": "Jupiter"}
  ]
}"#;

#[test]
fn json_rasi_chart_through_all_vargas() {
    init_logging();
    let rasi: RasiChart = serde_json::from_str(RASI_JSON).unwrap();
    assert_eq!(rasi.grahas.len(), 2);
    assert_eq!(rasi.lagna().unwrap().placement().rashi(), Rashi::Mesha);

    for &amsha in &VARGAS {
        let chart = compute_divisional_chart(&rasi, amsha.label()).unwrap();
        assert_eq!(chart.occupant_count(), 2);
        let v = to_dict(&chart).unwrap();
        assert_eq!(v["chartType"], amsha.label());
        assert!(v["ascendant"].get("signDegrees").is_some());
    }
}

#[test]
fn json_rejects_out_of_range_degrees() {
    let bad = RASI_JSON.replace("15.5", "30.5");
    assert!(serde_json::from_str::<RasiChart>(&bad).is_err());
}

#[test]
fn json_rejects_unknown_sign_as_invalid_placement() {
    let bad = RASI_JSON.replacen(r#""Gemini", "signDegrees""#, r#""Gemni", "signDegrees""#, 1);
    assert_ne!(bad, RASI_JSON);
    let err = serde_json::from_str::<RasiChart>(&bad).unwrap_err();
    assert!(err.to_string().contains("invalid placement"), "{err}");

    assert_eq!(
        Placement::from_names("Gemni", 8.2),
        Err(VargaError::InvalidPlacement(PlacementFault::Sign("Gemni".into())))
    );
}
