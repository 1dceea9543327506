// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Time related utils.

use chrono::Utc;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Whole seconds since the unix epoch.
#[inline]
pub fn unix_timestamp(t: DateTime) -> i64 {
    t.timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_unix_timestamp_truncates_sub_seconds() {
        let t = Utc.timestamp_opt(1_700_000_000, 999_000_000).unwrap();
        assert_eq!(unix_timestamp(t), 1_700_000_000);
    }
}
