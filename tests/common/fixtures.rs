//! Static log corpora used across harnesses.
//!
//! Each corpus is a realistic slice of one source file. Timestamps are all
//! on 2021-11-11 so window tests can carve the afternoon up predictably.
//! Note the web UI corpus is written one hour ahead, as that log is on the
//! server.

/// Salt event bus: tab-separated tag plus a multi-line JSON payload ending
/// at a lone `}`.
pub const BUS_LOG: &str = concat!(
    "salt/auth\t{\n",
    "    \"_stamp\": \"2021-11-11T16:00:10.000000\",\n",
    "    \"act\": \"accept\",\n",
    "    \"id\": \"minion-web01\",\n",
    "    \"result\": true\n",
    "}\n",
    "salt/job/20211111160500123456/new\t{\n",
    "    \"_stamp\": \"2021-11-11T16:05:00.123456\",\n",
    "    \"fun\": \"state.apply\",\n",
    "    \"minions\": [\n",
    "        \"minion-web01\"\n",
    "    ]\n",
    "}\n",
    "salt/job/20211111160500123456/ret/minion-web01\t{\n",
    "    \"_stamp\": \"2021-11-11T16:05:07.000000\",\n",
    "    \"fun\": \"state.apply\",\n",
    "    \"retcode\": 0,\n",
    "    \"success\": true\n",
    "}\n",
    "salt/minion/minion-web01/start\t{\n",
    "    \"_stamp\": \"2021-11-11T16:06:00.000000\",\n",
    "    \"id\": \"minion-web01\"\n",
    "}\n",
    "minion/refresh/minion-web01\t{\n",
    "    \"_stamp\": \"2021-11-11T16:07:00.000000\",\n",
    "    \"id\": \"minion-web01\"\n",
    "}\n"
);

/// Salt master log: DEBUG noise, one ERROR with a traceback, one INFO.
pub const MASTER_LOG: &str = concat!(
    "2021-11-11 16:01:00,100 [salt.utils.event  ][DEBUG   ][2266] Sending event\n",
    "2021-11-11 16:02:00,200 [salt.master       ][WARNING ][2266] Unable to bind socket\n",
    "2021-11-11 16:03:00,300 [salt.master       ][ERROR   ][2266] Failed to allocate a jid\n",
    "Traceback (most recent call last):\n",
    "  File \"/usr/lib/python3.6/site-packages/salt/master.py\", line 2002, in run_func\n",
    "OSError: out of jids\n",
    "2021-11-11 16:04:00,400 [salt.master       ][INFO    ][2266] Clearing cached minion data\n"
);

/// Salt api log.
pub const API_LOG: &str = concat!(
    "2021-11-11 16:08:00,500 [salt.api          ][INFO    ][3100] Starting api worker\n",
    "2021-11-11 16:09:00,600 [salt.netapi       ][DEBUG   ][3100] Performing auth\n",
    "2021-11-11 16:10:00,700 [salt.netapi       ][ERROR   ][3100] Authentication failure\n"
);

/// Java web UI log, written one hour ahead of the Salt logs. Contains a
/// non-error record, a suppressed noisy error, and a real error with a
/// stack trace.
pub const WEB_UI_LOG: &str = concat!(
    "2021-11-11 17:11:00,000 [ajp-nio-exec-1] INFO  com.redhat.rhn.common.RhnServlet - request\n",
    "2021-11-11 17:12:00,000 [ajp-nio-exec-2] ERROR com.redhat.rhn.frontend.LoginController - LOCAL AUTH FAILURE: bad password\n",
    "2021-11-11 17:13:00,000 [ajp-nio-exec-3] ERROR com.redhat.rhn.taskomatic.TaskoJob - Task failed\n",
    "java.lang.IllegalStateException: no such channel\n",
    "\tat com.redhat.rhn.taskomatic.TaskoJob.execute(TaskoJob.java:180)\n"
);
