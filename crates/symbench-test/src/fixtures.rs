// Dweve SymBench - Parallel Keyword-Count Benchmark Analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Canonical fixture texts.
//!
//! Expected values for these fixtures are listed next to each constant so
//! tests can assert exact numbers.

/// Timing log of a complete benchmark session.
///
/// Parses to six records once the Hybrid 8x2 run is excluded. The Hybrid line
/// with the legacy `(4 processes × OpenMP)` wording is skipped. The fastest
/// serial run takes 0.400000 s.
pub const PERFORMANCE_LOG: &str = "\
Serial version time: 0.480000 seconds\t No. of Processors: 1\t No. of Threads: 1
Serial version time: 0.400000 seconds\t No. of Processors: 1\t No. of Threads: 1
OpenMP version time: 0.160000 seconds\t No. of Processors: 1\t No. of Threads: 4
OpenMP version time: 0.100000 seconds\t No. of Processors: 1\t No. of Threads: 8
MPI version time: 0.200000 seconds\t No. of Processors: 4\t No. of Threads: 1
Hybrid version time (4 processes × OpenMP): 0.090000 sec
Hybrid version time: 0.080000 seconds\t No. of Processes: 4\t No. of Threads: 2
Hybrid version time: 0.500000 seconds\t No. of Processes: 8\t No. of Threads: 2
";

/// Number of records [`PERFORMANCE_LOG`] yields with default exclusions.
pub const PERFORMANCE_RECORD_COUNT: usize = 6;

/// Fastest serial time in [`PERFORMANCE_LOG`].
pub const FASTEST_SERIAL_SECONDS: f64 = 0.4;

/// Serial ground truth.
pub const SERIAL_COUNTS: &str = "\
fever: 120
cough: 85
headache: 64
fatigue: 40
rash: 12
";

/// Identical to the serial counts.
pub const OPENMP_COUNTS: &str = SERIAL_COUNTS;

/// One keyword off by two: 80 % match, MAE 0.4, RMSE sqrt(0.8).
pub const MPI_COUNTS: &str = "\
fever: 120
cough: 83
headache: 64
fatigue: 40
rash: 12
";

/// `fever` off by one, `rash` missing, `nausea` extra:
/// 60 % match, MAE 2.6, RMSE sqrt(29).
pub const HYBRID_COUNTS: &str = "\
fever: 121
cough: 85
headache: 64
fatigue: 40
nausea: 3
";

/// `(file stem, content)` for every count dump.
pub fn result_files() -> [(&'static str, &'static str); 4] {
    [
        ("serial", SERIAL_COUNTS),
        ("openmp", OPENMP_COUNTS),
        ("mpi", MPI_COUNTS),
        ("hybrid", HYBRID_COUNTS),
    ]
}

/// Symptom dataset in the layout the preprocessing step expects.
///
/// Fields keep the leading spaces of the original export.
pub const SYMPTOM_CSV: &str = "\
Disease,Symptom_1,Symptom_2,Symptom_3,Symptom_4,Symptom_5
Fungal infection, itching, skin_rash, nodal_skin_eruptions, dischromic _patches,
Allergy, continuous_sneezing, shivering, chills, watering_from_eyes,
GERD, stomach_pain, acidity, ulcers_on_tongue, vomiting, cough
";

/// Expected text output for [`SYMPTOM_CSV`].
pub const SYMPTOM_TEXT: &str = "\
fungal infection  itching  skin_rash  nodal_skin_eruptions  dischromic _patches
allergy  continuous_sneezing  shivering  chills  watering_from_eyes
gerd  stomach_pain  acidity  ulcers_on_tongue  vomiting  cough
";
